use embedded_hal_async::i2c::I2c;
use trackball_driver::{Mode, Rgb, Trackball, TrackballError};

/// The two hardware operations the coordinator needs from a trackball.
///
/// Implemented for [`Trackball`] directly. Firmware that shares the driver
/// between tasks implements it on its own handle (for example a wrapper
/// around a mutex-guarded `Trackball`).
#[allow(async_fn_in_trait)]
pub trait TrackballLink {
    /// Error returned when the hardware rejects an update.
    type Error;

    /// Whether the trackball is initialised and can take updates.
    fn is_ready(&self) -> bool {
        true
    }

    /// Switch the trackball's motion mode.
    async fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error>;

    /// Set the trackball's LED color.
    async fn set_led(&mut self, rgb: Rgb) -> Result<(), Self::Error>;
}

impl<I2C> TrackballLink for Trackball<I2C>
where
    I2C: I2c,
{
    type Error = TrackballError<I2C::Error>;

    fn is_ready(&self) -> bool {
        Trackball::is_ready(self)
    }

    async fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        Trackball::set_mode(self, mode);
        Ok(())
    }

    async fn set_led(&mut self, rgb: Rgb) -> Result<(), Self::Error> {
        Trackball::set_led(self, rgb).await
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
//
// Drive a real `Trackball` over a mocked I2C bus to check that the
// coordinator's updates land on the right registers.
