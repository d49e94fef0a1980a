//! Trackball configuration and motion mode.

use crate::led::Rgb;
use crate::registers::SENSITIVITY_UNITY;

/// How motion from the trackball is interpreted downstream.
///
/// The driver only uses the mode to pick the multiplier applied to each
/// sample; turning deltas into cursor or scroll events is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Pointer movement. Samples are multiplied by `move_factor`.
    #[default]
    Move,
    /// Scrolling. Samples are multiplied by `scroll_factor`.
    Scroll,
}

impl Mode {
    /// Decode the raw mode-select encoding: `0` is move, anything else scroll.
    pub const fn from_raw(value: u8) -> Self {
        if value > 0 {
            Mode::Scroll
        } else {
            Mode::Move
        }
    }

    /// Raw mode-select encoding (`0` = move, `1` = scroll).
    pub const fn as_raw(self) -> u8 {
        match self {
            Mode::Move => 0,
            Mode::Scroll => 1,
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Move => Mode::Scroll,
            Mode::Scroll => Mode::Move,
        }
    }

    /// Upper-case name used in log output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Move => "MOVE",
            Mode::Scroll => "SCROLL",
        }
    }
}

/// Static configuration for a [`Trackball`](crate::Trackball).
///
/// Fixed at construction. [`TrackballConfig::default()`] reproduces the
/// breakout's neutral settings: no inversion, unity sensitivity, unity
/// move/scroll factors, LED off, move mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackballConfig {
    /// Negate X deltas before scaling. Default: `false`.
    pub invert_x: bool,
    /// Negate Y deltas before scaling. Default: `false`.
    pub invert_y: bool,
    /// Sensitivity in 1/64 steps; 64 is ×1, 0 disables motion. Default: 64.
    pub sensitivity: u8,
    /// Multiplier applied in [`Mode::Move`]. Default: 1.
    pub move_factor: u8,
    /// Multiplier applied in [`Mode::Scroll`]. Default: 1.
    pub scroll_factor: u8,
    /// Mode the driver starts in. Default: [`Mode::Move`].
    pub default_mode: Mode,
    /// LED color written by [`Trackball::init()`](crate::Trackball::init).
    /// Default: off.
    pub boot_led: Rgb,
}

impl Default for TrackballConfig {
    fn default() -> Self {
        Self {
            invert_x: false,
            invert_y: false,
            sensitivity: SENSITIVITY_UNITY,
            move_factor: 1,
            scroll_factor: 1,
            default_mode: Mode::Move,
            boot_led: Rgb::OFF,
        }
    }
}

impl TrackballConfig {
    /// Multiplier for samples taken in `mode`.
    pub const fn factor_for(&self, mode: Mode) -> u8 {
        match mode {
            Mode::Move => self.move_factor,
            Mode::Scroll => self.scroll_factor,
        }
    }
}
