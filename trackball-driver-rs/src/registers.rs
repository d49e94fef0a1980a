//! Register address constants for the Pimoroni PIM447 trackball breakout.
//!
//! Every register is a single byte addressed by a one-byte offset. The four
//! motion registers are pulse counters that the trackball firmware clears on
//! read, so each sample yields the movement since the previous sample.

// ---------------------------------------------------------------------------
// LED registers
// ---------------------------------------------------------------------------

/// Red channel of the RGB indicator LED.
pub const REG_LED_RED: u8 = 0x00;

/// Green channel of the RGB indicator LED.
pub const REG_LED_GREEN: u8 = 0x01;

/// Blue channel of the RGB indicator LED.
pub const REG_LED_BLUE: u8 = 0x02;

// ---------------------------------------------------------------------------
// Motion registers
// ---------------------------------------------------------------------------

/// Pulses counted towards the left (negative X).
pub const REG_LEFT: u8 = 0x04;

/// Pulses counted towards the right (positive X).
pub const REG_RIGHT: u8 = 0x05;

/// Pulses counted upwards (negative Y).
pub const REG_UP: u8 = 0x06;

/// Pulses counted downwards (positive Y).
pub const REG_DOWN: u8 = 0x07;

// ---------------------------------------------------------------------------
// Status registers
// ---------------------------------------------------------------------------

/// Switch state register. Passed through to callers undecoded.
pub const REG_SWITCH: u8 = 0x08;

/// User flash region (not used by this driver).
#[allow(dead_code)]
pub const REG_USER_FLASH: u8 = 0xD0;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address of the trackball breakout.
pub const DEFAULT_ADDRESS: u8 = 0x0A;

/// Alternate I2C address selected by the breakout's address jumper.
pub const ALTERNATE_ADDRESS: u8 = 0x0B;

/// Sensitivity value that leaves motion unscaled (×1).
pub const SENSITIVITY_UNITY: u8 = 64;
