//! High-level interface for the Pimoroni PIM447 trackball.
//!
//! [`Trackball`] samples the motion counters and switch register into a
//! cached [`TrackballState`], and exposes the two settings the trackball
//! supports: the motion mode and the LED color.

use embedded_hal_async::i2c::I2c;

use crate::axis::{read_axis, scale, X_AXIS, Y_AXIS};
use crate::config::{Mode, TrackballConfig};
use crate::driver::RegisterBus;
use crate::error::TrackballError;
use crate::led::{LedController, Rgb};
use crate::registers::REG_SWITCH;

/// Data channels of the trackball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Every channel. Only meaningful for [`Trackball::fetch()`].
    All,
    /// Scaled horizontal delta.
    DeltaX,
    /// Scaled vertical delta.
    DeltaY,
    /// Raw switch register.
    Button,
}

/// Attributes accepted by [`Trackball::attr_set()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attribute {
    /// Motion mode. Value: one byte, `0` = move, non-zero = scroll.
    ModeSelect,
    /// LED color. Value: three bytes, red, green, blue.
    LedRgb,
    /// Any other attribute code. Always rejected.
    Other(u8),
}

/// Snapshot of the driver's cached state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackballState {
    /// Scaled X delta from the last successful X sample.
    pub dx: i32,
    /// Scaled Y delta from the last successful Y sample.
    pub dy: i32,
    /// Raw switch register from the last successful button sample.
    pub button_state: u8,
    /// Mode used for the next sample.
    pub mode: Mode,
    /// Last LED color written in full.
    pub led_rgb: Rgb,
}

/// Driver for the Pimoroni PIM447 trackball breakout.
///
/// Sampling is split in two steps: [`fetch()`](Self::fetch) talks to the
/// hardware and updates the cache, [`read()`](Self::read) returns cached
/// values without any I2C traffic.
///
/// # Example
///
/// ```ignore
/// use trackball_driver::{Channel, Trackball, TrackballConfig, DEFAULT_ADDRESS};
///
/// // `i2c` is any `embedded-hal-async` I2C implementation
/// let mut trackball = Trackball::new(i2c, DEFAULT_ADDRESS, TrackballConfig::default());
/// trackball.init().await?;
///
/// trackball.fetch(Channel::All).await?;
/// let dx = trackball.read(Channel::DeltaX)?;
/// ```
pub struct Trackball<I2C> {
    bus: RegisterBus<I2C>,
    config: TrackballConfig,
    led: LedController,
    dx: i32,
    dy: i32,
    button_state: u8,
    mode: Mode,
    ready: bool,
}

impl<I2C> Trackball<I2C>
where
    I2C: I2c,
{
    /// Create a new trackball driver.
    ///
    /// No I2C traffic is generated. The driver starts in
    /// `config.default_mode` with all cached samples at zero.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral (takes ownership for exclusive access)
    /// * `address`: 7-bit I2C device address (typically 0x0A)
    /// * `config`: static tuning, see [`TrackballConfig`]
    pub fn new(i2c: I2C, address: u8, config: TrackballConfig) -> Self {
        Self {
            bus: RegisterBus::new(i2c, address),
            mode: config.default_mode,
            config,
            led: LedController::new(),
            dx: 0,
            dy: 0,
            button_state: 0,
            ready: false,
        }
    }

    /// Bring the trackball up by writing the boot LED color.
    ///
    /// Marks the driver ready on success. On failure the driver stays not
    /// ready and the bus error is returned; calling `init()` again retries.
    pub async fn init(&mut self) -> Result<(), TrackballError<I2C::Error>> {
        if let Err(e) = self.led.set(&mut self.bus, self.config.boot_led).await {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to set initial LED color");
            return Err(e);
        }

        self.ready = true;

        #[cfg(feature = "defmt")]
        defmt::info!("Pimoroni Trackball initialized (addr: {=u8:#x})", self.bus.address());
        Ok(())
    }

    /// Whether [`init()`](Self::init) has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The configuration the driver was built with.
    pub fn config(&self) -> &TrackballConfig {
        &self.config
    }

    /// Consume the driver and give back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.bus.release()
    }

    // -----------------------------------------------------------------------
    // Sampling
    // -----------------------------------------------------------------------

    /// Sample the hardware for `selector`.
    ///
    /// For [`Channel::All`] the order is X, then Y, then the switch. The
    /// first failed read aborts the rest: channels sampled before the
    /// failure keep their new values, channels not yet sampled keep their
    /// previous values.
    ///
    /// # Errors
    /// * [`TrackballError::I2c`] on communication failure
    pub async fn fetch(&mut self, selector: Channel) -> Result<(), TrackballError<I2C::Error>> {
        let factor = self.config.factor_for(self.mode);

        if matches!(selector, Channel::All | Channel::DeltaX) {
            let raw = read_axis(&mut self.bus, X_AXIS).await?;
            self.dx = scale(raw, self.config.invert_x, self.config.sensitivity, factor);
        }

        if matches!(selector, Channel::All | Channel::DeltaY) {
            let raw = read_axis(&mut self.bus, Y_AXIS).await?;
            self.dy = scale(raw, self.config.invert_y, self.config.sensitivity, factor);
        }

        if matches!(selector, Channel::All | Channel::Button) {
            self.button_state = self.read_button().await?;
        }

        Ok(())
    }

    /// Read the switch register, undecoded.
    async fn read_button(&mut self) -> Result<u8, TrackballError<I2C::Error>> {
        self.bus.read_u8(REG_SWITCH).await
    }

    /// Return the cached value of `channel`.
    ///
    /// Never touches the bus.
    ///
    /// # Errors
    /// * [`TrackballError::Unsupported`] for [`Channel::All`]
    pub fn read(&self, channel: Channel) -> Result<i32, TrackballError<I2C::Error>> {
        match channel {
            Channel::DeltaX => Ok(self.dx),
            Channel::DeltaY => Ok(self.dy),
            Channel::Button => Ok(i32::from(self.button_state)),
            Channel::All => Err(TrackballError::Unsupported),
        }
    }

    /// Copy of the full cached state.
    pub fn state(&self) -> TrackballState {
        TrackballState {
            dx: self.dx,
            dy: self.dy,
            button_state: self.button_state,
            mode: self.mode,
            led_rgb: self.led.current(),
        }
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Current motion mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the motion mode.
    ///
    /// Takes effect from the next [`fetch()`](Self::fetch); already cached
    /// deltas are not rescaled.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;

        #[cfg(feature = "defmt")]
        defmt::info!("Trackball mode set to {}", mode.as_str());
    }

    /// Last LED color written in full.
    pub fn led(&self) -> Rgb {
        self.led.current()
    }

    /// Write the LED color (red, green, blue register order).
    ///
    /// # Errors
    /// * [`TrackballError::I2c`] on the first failed register write. The
    ///   cached color is left unchanged.
    pub async fn set_led(&mut self, rgb: Rgb) -> Result<(), TrackballError<I2C::Error>> {
        self.led.set(&mut self.bus, rgb).await
    }

    /// Generic attribute entry point for host pipelines.
    ///
    /// Attributes are set on the [`Channel::Button`] channel only and map
    /// onto [`set_mode()`](Self::set_mode) and [`set_led()`](Self::set_led).
    ///
    /// # Errors
    /// * [`TrackballError::Unsupported`] for any other channel or attribute
    /// * [`TrackballError::InvalidValue`] if `value` is too short
    /// * [`TrackballError::I2c`] if the LED write fails
    pub async fn attr_set(
        &mut self,
        channel: Channel,
        attribute: Attribute,
        value: &[u8],
    ) -> Result<(), TrackballError<I2C::Error>> {
        if channel != Channel::Button {
            return Err(TrackballError::Unsupported);
        }

        match attribute {
            Attribute::ModeSelect => {
                let Some(&raw) = value.first() else {
                    return Err(TrackballError::InvalidValue);
                };
                self.set_mode(Mode::from_raw(raw));
                Ok(())
            }
            Attribute::LedRgb => match *value {
                [red, green, blue, ..] => self.set_led(Rgb::new(red, green, blue)).await,
                _ => Err(TrackballError::InvalidValue),
            },
            Attribute::Other(_) => Err(TrackballError::Unsupported),
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
