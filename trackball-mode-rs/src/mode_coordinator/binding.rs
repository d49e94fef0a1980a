use trackball_driver::Mode;

/// Binding parameter: flip between move and scroll.
pub const MOVE_TOGGLE: u8 = 0;
/// Binding parameter: switch to scroll.
pub const SCROLL_SET: u8 = 1;
/// Binding parameter: switch to move.
pub const MOVE_SET: u8 = 2;

/// What a key press asks the coordinator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeBinding {
    /// Always flips the mode.
    Toggle,
    /// Enters scroll mode; no-op if already scrolling.
    SetScroll,
    /// Enters move mode; no-op if already moving.
    SetMove,
}

impl ModeBinding {
    /// Decode a raw binding parameter. `None` for anything but 0, 1 or 2.
    pub const fn from_param(param: u8) -> Option<Self> {
        match param {
            MOVE_TOGGLE => Some(ModeBinding::Toggle),
            SCROLL_SET => Some(ModeBinding::SetScroll),
            MOVE_SET => Some(ModeBinding::SetMove),
            _ => None,
        }
    }

    /// Mode after applying this binding in `current`.
    ///
    /// Returns `None` when the mode stays the same, so callers can skip
    /// hardware updates on the no-op path.
    pub const fn apply(self, current: Mode) -> Option<Mode> {
        match (self, current) {
            (ModeBinding::Toggle, mode) => Some(mode.toggled()),
            (ModeBinding::SetScroll, Mode::Move) => Some(Mode::Scroll),
            (ModeBinding::SetMove, Mode::Scroll) => Some(Mode::Move),
            (ModeBinding::SetScroll, Mode::Scroll) | (ModeBinding::SetMove, Mode::Move) => None,
        }
    }
}
