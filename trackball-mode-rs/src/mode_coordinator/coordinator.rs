use trackball_driver::Mode;

use super::binding::ModeBinding;
use super::config::ModeConfig;
use super::error::ModeError;
use super::link::TrackballLink;

/// Owns the logical trackball mode and mirrors it onto the hardware.
///
/// The trackball is injected at construction as an optional
/// [`TrackballLink`]. A missing or not-ready trackball disables hardware
/// updates for good; the state machine itself keeps working.
///
/// # Example
///
/// ```ignore
/// use trackball_mode::mode_coordinator::{ModeConfig, ModeCoordinator, MOVE_TOGGLE};
///
/// let mut coordinator = ModeCoordinator::new(ModeConfig::default(), Some(trackball));
/// coordinator.init().await?;
///
/// // On key press:
/// let mode = coordinator.on_pressed(MOVE_TOGGLE).await?;
/// ```
pub struct ModeCoordinator<L> {
    config: ModeConfig,
    mode: Mode,
    /// `None` when no ready trackball was attached.
    link: Option<L>,
}

impl<L> ModeCoordinator<L>
where
    L: TrackballLink,
{
    /// Create a coordinator in `config.default_mode`.
    ///
    /// No hardware traffic is generated. A trackball that reports itself
    /// not ready is dropped, see [`ModeError::DeviceNotReady`].
    pub fn new(config: ModeConfig, link: Option<L>) -> Self {
        let link = match link {
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Trackball device not found");
                None
            }
            Some(link) if !link.is_ready() => {
                #[cfg(feature = "defmt")]
                defmt::error!("Trackball device not ready");
                None
            }
            Some(link) => Some(link),
        };

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Trackball mode behavior initialized, default mode: {}",
            config.default_mode.as_str()
        );

        Self {
            mode: config.default_mode,
            config,
            link,
        }
    }

    /// Push the startup mode and its LED color to the trackball.
    ///
    /// # Errors
    /// * [`ModeError::DeviceNotReady`] if no trackball is attached
    /// * [`ModeError::Link`] if the trackball rejected an update
    pub async fn init(&mut self) -> Result<(), ModeError<L::Error>> {
        if self.link.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("No trackball attached; LED feedback disabled");
            return Err(ModeError::DeviceNotReady);
        }

        self.notify().await
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Current logical mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    /// Whether hardware updates are enabled.
    pub fn has_trackball(&self) -> bool {
        self.link.is_some()
    }

    /// The attached trackball, if any.
    pub fn trackball(&self) -> Option<&L> {
        self.link.as_ref()
    }

    /// Consume the coordinator and hand back the attached trackball.
    pub fn release(self) -> Option<L> {
        self.link
    }

    // ── Binding events ───────────────────────────────────────────────

    /// Handle a key press carrying a raw binding parameter.
    ///
    /// Returns the mode after the press.
    ///
    /// # Errors
    /// * [`ModeError::Unsupported`] for an unknown parameter; nothing changes
    /// * [`ModeError::Link`] if a hardware update failed; the new mode is
    ///   kept regardless
    pub async fn on_pressed(&mut self, param: u8) -> Result<Mode, ModeError<L::Error>> {
        let Some(binding) = ModeBinding::from_param(param) else {
            #[cfg(feature = "defmt")]
            defmt::error!("Unknown trackball mode parameter: {}", param);
            return Err(ModeError::Unsupported);
        };

        self.apply(binding).await
    }

    /// Handle the matching key release. Releases never change the mode.
    pub fn on_released(&mut self, _param: u8) {}

    /// Apply a decoded binding.
    ///
    /// On a mode change the trackball is sent the new mode, then the LED
    /// color for it. Both updates are attempted even if the first fails;
    /// the first error is returned. Unchanged modes generate no traffic.
    pub async fn apply(&mut self, binding: ModeBinding) -> Result<Mode, ModeError<L::Error>> {
        if let Some(mode) = binding.apply(self.mode) {
            self.mode = mode;
            self.notify().await?;

            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Trackball mode changed to {}, LED color set to {}",
                mode.as_str(),
                self.config.preset_for(mode)
            );
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Trackball mode: {}", self.mode.as_str());

        Ok(self.mode)
    }

    /// Mirror the current mode onto the trackball, if one is attached.
    async fn notify(&mut self) -> Result<(), ModeError<L::Error>> {
        let Some(link) = self.link.as_mut() else {
            return Ok(());
        };

        let mode_result = link.set_mode(self.mode).await;
        if mode_result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to set trackball mode");
        }

        let led_result = link.set_led(self.config.led_for(self.mode)).await;
        if led_result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to set trackball LED");
        }

        mode_result.and(led_result).map_err(ModeError::Link)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use trackball_driver::Rgb;

    use super::*;
    use crate::mode_coordinator::{MOVE_SET, MOVE_TOGGLE, SCROLL_SET};

    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Mode(Mode),
        Led(Rgb),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct LinkDown;

    /// Records every update; can be told to fail either one.
    #[derive(Default)]
    struct FakeLink {
        calls: Vec<Call>,
        not_ready: bool,
        fail_mode: bool,
        fail_led: bool,
    }

    impl TrackballLink for FakeLink {
        type Error = LinkDown;

        fn is_ready(&self) -> bool {
            !self.not_ready
        }

        async fn set_mode(&mut self, mode: Mode) -> Result<(), LinkDown> {
            self.calls.push(Call::Mode(mode));
            if self.fail_mode {
                Err(LinkDown)
            } else {
                Ok(())
            }
        }

        async fn set_led(&mut self, rgb: Rgb) -> Result<(), LinkDown> {
            self.calls.push(Call::Led(rgb));
            if self.fail_led {
                Err(LinkDown)
            } else {
                Ok(())
            }
        }
    }

    fn coordinator(default_mode: Mode) -> ModeCoordinator<FakeLink> {
        let config = ModeConfig {
            default_mode,
            ..ModeConfig::default()
        };
        ModeCoordinator::new(config, Some(FakeLink::default()))
    }

    fn calls(c: &ModeCoordinator<FakeLink>) -> &[Call] {
        &c.trackball().unwrap().calls
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn starts_in_default_mode_without_traffic() {
        let c = coordinator(Mode::Scroll);
        assert_eq!(c.mode(), Mode::Scroll);
        assert!(c.has_trackball());
        assert!(calls(&c).is_empty());
    }

    #[test]
    fn init_pushes_default_mode_and_led() {
        let mut c = coordinator(Mode::Move);
        block_on(c.init()).unwrap();
        assert_eq!(calls(&c), &[Call::Mode(Mode::Move), Call::Led(GREEN)]);
    }

    #[test]
    fn not_ready_link_is_dropped() {
        let link = FakeLink {
            not_ready: true,
            ..FakeLink::default()
        };
        let c = ModeCoordinator::new(ModeConfig::default(), Some(link));
        assert!(!c.has_trackball());
    }

    #[test]
    fn init_without_trackball_reports_device_not_ready() {
        let mut c: ModeCoordinator<FakeLink> = ModeCoordinator::new(ModeConfig::default(), None);
        assert_eq!(block_on(c.init()), Err(ModeError::DeviceNotReady));
    }

    // ── Transitions ──────────────────────────────────────────────────

    #[test]
    fn toggle_twice_round_trips_with_led_feedback() {
        let mut c = coordinator(Mode::Move);

        assert_eq!(block_on(c.on_pressed(MOVE_TOGGLE)), Ok(Mode::Scroll));
        assert_eq!(calls(&c), &[Call::Mode(Mode::Scroll), Call::Led(BLUE)]);

        assert_eq!(block_on(c.on_pressed(MOVE_TOGGLE)), Ok(Mode::Move));
        assert_eq!(
            calls(&c),
            &[
                Call::Mode(Mode::Scroll),
                Call::Led(BLUE),
                Call::Mode(Mode::Move),
                Call::Led(GREEN),
            ]
        );
    }

    #[test]
    fn set_scroll_is_noop_when_scrolling() {
        let mut c = coordinator(Mode::Scroll);
        assert_eq!(block_on(c.on_pressed(SCROLL_SET)), Ok(Mode::Scroll));
        assert!(calls(&c).is_empty());
    }

    #[test]
    fn set_move_is_noop_when_moving() {
        let mut c = coordinator(Mode::Move);
        assert_eq!(block_on(c.on_pressed(MOVE_SET)), Ok(Mode::Move));
        assert!(calls(&c).is_empty());
    }

    #[test]
    fn set_scroll_then_set_move_switch_once_each() {
        let mut c = coordinator(Mode::Move);

        block_on(c.on_pressed(SCROLL_SET)).unwrap();
        block_on(c.on_pressed(SCROLL_SET)).unwrap();
        block_on(c.on_pressed(MOVE_SET)).unwrap();

        assert_eq!(c.mode(), Mode::Move);
        assert_eq!(
            calls(&c),
            &[
                Call::Mode(Mode::Scroll),
                Call::Led(BLUE),
                Call::Mode(Mode::Move),
                Call::Led(GREEN),
            ]
        );
    }

    #[test]
    fn unknown_param_changes_nothing() {
        let mut c = coordinator(Mode::Move);

        assert_eq!(block_on(c.on_pressed(99)), Err(ModeError::Unsupported));
        assert_eq!(block_on(c.on_pressed(3)), Err(ModeError::Unsupported));

        assert_eq!(c.mode(), Mode::Move);
        assert!(calls(&c).is_empty());
    }

    #[test]
    fn release_never_transitions() {
        let mut c = coordinator(Mode::Move);
        c.on_released(MOVE_TOGGLE);
        assert_eq!(c.mode(), Mode::Move);
        assert!(calls(&c).is_empty());
    }

    #[test]
    fn custom_presets_are_resolved() {
        let config = ModeConfig {
            default_mode: Mode::Move,
            led_mode_move: 7,
            led_mode_scroll: 12,
        };
        let mut c = ModeCoordinator::new(config, Some(FakeLink::default()));

        block_on(c.on_pressed(MOVE_TOGGLE)).unwrap();
        block_on(c.on_pressed(MOVE_TOGGLE)).unwrap();

        assert_eq!(
            calls(&c),
            &[
                Call::Mode(Mode::Scroll),
                Call::Led(Rgb::OFF),
                Call::Mode(Mode::Move),
                Call::Led(Rgb::new(255, 255, 255)),
            ]
        );
    }

    // ── Hardware failures ────────────────────────────────────────────

    #[test]
    fn led_failure_keeps_new_mode() {
        let link = FakeLink {
            fail_led: true,
            ..FakeLink::default()
        };
        let mut c = ModeCoordinator::new(ModeConfig::default(), Some(link));

        assert_eq!(block_on(c.on_pressed(MOVE_TOGGLE)), Err(ModeError::Link(LinkDown)));
        assert_eq!(c.mode(), Mode::Scroll);

        // The next toggle still flips from the logical mode.
        assert_eq!(block_on(c.on_pressed(MOVE_TOGGLE)), Err(ModeError::Link(LinkDown)));
        assert_eq!(c.mode(), Mode::Move);
    }

    #[test]
    fn mode_failure_still_attempts_led() {
        let link = FakeLink {
            fail_mode: true,
            ..FakeLink::default()
        };
        let mut c = ModeCoordinator::new(ModeConfig::default(), Some(link));

        assert_eq!(block_on(c.on_pressed(SCROLL_SET)), Err(ModeError::Link(LinkDown)));
        assert_eq!(c.mode(), Mode::Scroll);
        assert_eq!(calls(&c), &[Call::Mode(Mode::Scroll), Call::Led(BLUE)]);
    }

    #[test]
    fn works_as_pure_state_machine_without_trackball() {
        let mut c: ModeCoordinator<FakeLink> = ModeCoordinator::new(ModeConfig::default(), None);

        assert_eq!(block_on(c.on_pressed(MOVE_TOGGLE)), Ok(Mode::Scroll));
        assert_eq!(block_on(c.on_pressed(SCROLL_SET)), Ok(Mode::Scroll));
        assert_eq!(block_on(c.on_pressed(MOVE_SET)), Ok(Mode::Move));
        assert_eq!(block_on(c.on_pressed(42)), Err(ModeError::Unsupported));
        assert_eq!(c.mode(), Mode::Move);
    }
}
