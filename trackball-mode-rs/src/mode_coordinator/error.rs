/// Errors reported by the [`ModeCoordinator`](super::ModeCoordinator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeError<E> {
    /// Binding parameter is not one of `MOVE_TOGGLE`, `SCROLL_SET`, `MOVE_SET`.
    /// The mode is unchanged.
    Unsupported,
    /// No ready trackball was attached at construction; hardware updates
    /// are disabled for the lifetime of the coordinator.
    DeviceNotReady,
    /// The trackball rejected a mode or LED update. The logical mode has
    /// already changed.
    Link(E),
}
