//! Low-level register access for the trackball.
//!
//! Implements the single-byte register transactions the trackball firmware
//! understands. Each call is exactly one I2C transaction: there is no retry
//! and no timeout beyond what the I2C peripheral itself enforces.
//!
//! This module is crate-private; consumers interact with [`Trackball`]
//! in `trackball.rs` instead.
//!
//! [`Trackball`]: crate::Trackball

use embedded_hal_async::i2c::I2c;

use crate::error::TrackballError;

/// Register-level bus access.
///
/// Owns the I2C peripheral and the device address.
pub(crate) struct RegisterBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> RegisterBus<I2C>
where
    I2C: I2c,
{
    /// Create a new register bus.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral (takes ownership for exclusive access)
    /// * `address`: 7-bit I2C device address (typically 0x0A)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address this bus talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    // -----------------------------------------------------------------------
    // Single-byte transactions
    // -----------------------------------------------------------------------

    /// Read one register.
    ///
    /// Sends the register offset and reads the one-byte response within a
    /// single `write_read` transaction.
    pub async fn read_u8(
        &mut self,
        register: u8,
    ) -> Result<u8, TrackballError<I2C::Error>> {
        let mut buf = [0u8; 1];

        if let Err(e) = self.i2c.write_read(self.address, &[register], &mut buf).await {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to read register {=u8:#x}", register);
            return Err(e.into());
        }

        Ok(buf[0])
    }

    /// Write one register.
    ///
    /// Register offset and value go out together as a two-byte write.
    pub async fn write_u8(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), TrackballError<I2C::Error>> {
        if let Err(e) = self.i2c.write(self.address, &[register, value]).await {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to write register {=u8:#x}", register);
            return Err(e.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    use super::*;

    const ADDR: u8 = 0x0A;

    #[test]
    fn read_u8_is_one_write_read() {
        let expectations = [Transaction::write_read(ADDR, vec![0x08], vec![0x81])];
        let mut bus = RegisterBus::new(Mock::new(&expectations), ADDR);

        assert_eq!(block_on(bus.read_u8(0x08)).unwrap(), 0x81);
        bus.release().done();
    }

    #[test]
    fn write_u8_sends_register_then_value() {
        let expectations = [Transaction::write(ADDR, vec![0x01, 0xFF])];
        let mut bus = RegisterBus::new(Mock::new(&expectations), ADDR);

        block_on(bus.write_u8(0x01, 0xFF)).unwrap();
        bus.release().done();
    }

    #[test]
    fn read_failure_is_reported_as_i2c_error() {
        let expectations =
            [Transaction::write_read(ADDR, vec![0x04], vec![0x00]).with_error(ErrorKind::Other)];
        let mut bus = RegisterBus::new(Mock::new(&expectations), ADDR);

        let result = block_on(bus.read_u8(0x04));
        assert!(matches!(result, Err(TrackballError::I2c(ErrorKind::Other))));
        bus.release().done();
    }

    #[test]
    fn address_is_kept() {
        let expectations: [Transaction; 0] = [];
        let bus = RegisterBus::new(Mock::new(&expectations), 0x0B);
        assert_eq!(bus.address(), 0x0B);
        bus.release().done();
    }
}
