//! RGB indicator LED: color presets and the cached register writer.

use embedded_hal_async::i2c::I2c;

use crate::driver::RegisterBus;
use crate::error::TrackballError;
use crate::registers::{REG_LED_BLUE, REG_LED_GREEN, REG_LED_RED};

/// An RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// All channels off.
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// The eight named LED colors, addressable by index 0–7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ColorPreset {
    Off = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
    Yellow = 4,
    Cyan = 5,
    Magenta = 6,
    White = 7,
}

/// RGB values for each preset, indexed by preset number.
const PRESET_TABLE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),       // Off
    Rgb::new(255, 0, 0),     // Red
    Rgb::new(0, 255, 0),     // Green
    Rgb::new(0, 0, 255),     // Blue
    Rgb::new(255, 255, 0),   // Yellow
    Rgb::new(0, 255, 255),   // Cyan
    Rgb::new(255, 0, 255),   // Magenta
    Rgb::new(255, 255, 255), // White
];

const PRESETS: [ColorPreset; 8] = [
    ColorPreset::Off,
    ColorPreset::Red,
    ColorPreset::Green,
    ColorPreset::Blue,
    ColorPreset::Yellow,
    ColorPreset::Cyan,
    ColorPreset::Magenta,
    ColorPreset::White,
];

impl ColorPreset {
    /// Look up a preset by index. `None` outside 0–7.
    pub const fn from_index(index: i32) -> Option<Self> {
        if index >= 0 && index < PRESETS.len() as i32 {
            Some(PRESETS[index as usize])
        } else {
            None
        }
    }

    /// Preset index (0–7).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// RGB value of this preset.
    pub const fn rgb(self) -> Rgb {
        PRESET_TABLE[self as usize]
    }
}

/// Map a preset index to its RGB value.
///
/// Total over every integer: indices outside 0–7 map to off rather than
/// failing.
///
/// # Examples
///
/// ```
/// use trackball_driver::{preset_to_rgb, Rgb};
///
/// assert_eq!(preset_to_rgb(3), Rgb::new(0, 0, 255));
/// assert_eq!(preset_to_rgb(42), Rgb::OFF);
/// ```
pub const fn preset_to_rgb(index: i32) -> Rgb {
    match ColorPreset::from_index(index) {
        Some(preset) => preset.rgb(),
        None => Rgb::OFF,
    }
}

/// LED register writer that remembers the last color fully written.
pub(crate) struct LedController {
    current: Rgb,
}

impl LedController {
    pub fn new() -> Self {
        Self { current: Rgb::OFF }
    }

    /// The last color written with all three channels acknowledged.
    pub fn current(&self) -> Rgb {
        self.current
    }

    /// Write red, green, then blue.
    ///
    /// Stops at the first failed write. Channels written before the failure
    /// stay written on the hardware, but the cached color only changes once
    /// all three writes succeed.
    pub async fn set<I2C: I2c>(
        &mut self,
        bus: &mut RegisterBus<I2C>,
        rgb: Rgb,
    ) -> Result<(), TrackballError<I2C::Error>> {
        bus.write_u8(REG_LED_RED, rgb.red).await?;
        bus.write_u8(REG_LED_GREEN, rgb.green).await?;
        bus.write_u8(REG_LED_BLUE, rgb.blue).await?;

        self.current = rgb;

        #[cfg(feature = "defmt")]
        defmt::debug!("Set LED color to RGB({}, {}, {})", rgb.red, rgb.green, rgb.blue);
        Ok(())
    }
}
