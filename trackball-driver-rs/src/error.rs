//! Error types for the trackball driver.

use core::fmt;

/// Errors that can occur when communicating with the trackball.
#[derive(Debug)]
pub enum TrackballError<E> {
    /// Underlying I2C bus error. Only the operation in flight is aborted.
    I2c(E),

    /// Channel or attribute combination the trackball does not support.
    Unsupported,

    /// Attribute payload is missing bytes (mode needs 1, LED needs 3).
    InvalidValue,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for TrackballError<E> {
    fn from(error: E) -> Self {
        TrackballError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for TrackballError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackballError::I2c(e) => write!(f, "I2C error: {:?}", e),
            TrackballError::Unsupported => write!(f, "Unsupported channel or attribute"),
            TrackballError::InvalidValue => write!(f, "Attribute value too short"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for TrackballError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            TrackballError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            TrackballError::Unsupported => defmt::write!(f, "Unsupported channel or attribute"),
            TrackballError::InvalidValue => defmt::write!(f, "Attribute value too short"),
        }
    }
}
