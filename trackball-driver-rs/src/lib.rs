//! Async driver for the Pimoroni PIM447 trackball breakout.
//!
//! This crate provides an Embassy-compatible async I2C driver for the
//! Pimoroni trackball: four optical pulse counters, a push switch and an
//! RGB indicator LED behind a single-byte register map.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private): single-byte register reads and writes,
//!   one I2C transaction each.
//! - **[`Trackball`]** (public): samples motion and switch state into a
//!   cache, scales deltas (see [`scale`]), and sets the motion [`Mode`] and
//!   LED color.
//!
//! # Quick start
//!
//! ```ignore
//! use trackball_driver::{Channel, Trackball, TrackballConfig, DEFAULT_ADDRESS};
//!
//! // Construct with any `embedded-hal-async` I2C implementation
//! let mut trackball = Trackball::new(i2c, DEFAULT_ADDRESS, TrackballConfig::default());
//! trackball.init().await?;
//!
//! // Sample, then read the cached deltas
//! trackball.fetch(Channel::All).await?;
//! let dx = trackball.read(Channel::DeltaX)?;
//! let dy = trackball.read(Channel::DeltaY)?;
//! ```
//!
//! # Features
//!
//! - **`defmt`**: structured logging via [`defmt`] and
//!   [`defmt::Format`] implementations on public types.

#![cfg_attr(not(test), no_std)]

pub use axis::scale;
pub use config::{Mode, TrackballConfig};
pub use error::TrackballError;
pub use led::{preset_to_rgb, ColorPreset, Rgb};
pub use registers::{ALTERNATE_ADDRESS, DEFAULT_ADDRESS, SENSITIVITY_UNITY};
pub use trackball::{Attribute, Channel, Trackball, TrackballState};

mod axis;
mod config;
mod driver;
mod error;
mod led;
mod registers;
mod trackball;
