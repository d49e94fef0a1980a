//! Motion sampling: paired pulse counters to signed, scaled deltas.
//!
//! Each axis has a negative-direction and a positive-direction counter.
//! The raw delta is `positive − negative`; [`scale`] then applies
//! inversion, sensitivity and the mode multiplier in a fixed order.

use embedded_hal_async::i2c::I2c;

use crate::driver::RegisterBus;
use crate::error::TrackballError;
use crate::registers::{REG_DOWN, REG_LEFT, REG_RIGHT, REG_UP, SENSITIVITY_UNITY};

/// The two counter registers making up one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxisPair {
    pub negative: u8,
    pub positive: u8,
}

/// Horizontal axis: left is negative, right is positive.
pub(crate) const X_AXIS: AxisPair = AxisPair {
    negative: REG_LEFT,
    positive: REG_RIGHT,
};

/// Vertical axis: up is negative, down is positive.
pub(crate) const Y_AXIS: AxisPair = AxisPair {
    negative: REG_UP,
    positive: REG_DOWN,
};

/// Read both counters of `axis` and return `positive − negative`.
///
/// The negative register is read first. If that read fails the positive
/// register is not touched.
pub(crate) async fn read_axis<I2C: I2c>(
    bus: &mut RegisterBus<I2C>,
    axis: AxisPair,
) -> Result<i16, TrackballError<I2C::Error>> {
    let negative = bus.read_u8(axis.negative).await?;
    let positive = bus.read_u8(axis.positive).await?;

    Ok(i16::from(positive) - i16::from(negative))
}

/// Scale a raw axis delta.
///
/// Evaluated as `((invert ? -raw : raw) * sensitivity / 64) * mode_factor`.
/// The division truncates toward zero and happens exactly once, before the
/// mode multiplier, so small movements at low sensitivity are dropped
/// rather than amplified.
///
/// # Examples
///
/// ```
/// use trackball_driver::scale;
///
/// assert_eq!(scale(5, false, 64, 2), 10);
/// assert_eq!(scale(5, true, 64, 2), -10);
/// // 1 * 63 / 64 truncates to 0 before the factor applies.
/// assert_eq!(scale(1, false, 63, 2), 0);
/// ```
pub fn scale(raw_delta: i16, invert: bool, sensitivity: u8, mode_factor: u8) -> i32 {
    let delta = if invert {
        -i32::from(raw_delta)
    } else {
        i32::from(raw_delta)
    };

    let sensed = delta * i32::from(sensitivity) / i32::from(SENSITIVITY_UNITY);
    sensed * i32::from(mode_factor)
}
