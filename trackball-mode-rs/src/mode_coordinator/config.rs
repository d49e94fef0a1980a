use trackball_driver::{preset_to_rgb, ColorPreset, Mode, Rgb};

/// Static configuration for a [`ModeCoordinator`](super::ModeCoordinator).
///
/// LED colors are preset indices (0–7, see [`ColorPreset`]); any other
/// value turns the LED off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeConfig {
    /// Mode at startup. Default: [`Mode::Move`].
    pub default_mode: Mode,
    /// LED preset shown in move mode. Default: 2 (green).
    pub led_mode_move: u8,
    /// LED preset shown in scroll mode. Default: 3 (blue).
    pub led_mode_scroll: u8,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Move,
            led_mode_move: ColorPreset::Green.index(),
            led_mode_scroll: ColorPreset::Blue.index(),
        }
    }
}

impl ModeConfig {
    /// Preset index configured for `mode`.
    pub const fn preset_for(&self, mode: Mode) -> u8 {
        match mode {
            Mode::Move => self.led_mode_move,
            Mode::Scroll => self.led_mode_scroll,
        }
    }

    /// LED color configured for `mode`.
    pub const fn led_for(&self, mode: Mode) -> Rgb {
        preset_to_rgb(self.preset_for(mode) as i32)
    }
}
