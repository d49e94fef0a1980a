//! trackball-hw-interface
//!
//! Trackball → ModeCoordinator integration firmware for the Raspberry Pi
//! Pico 2. Wires the two library crates into a live loop:
//!
//! 1. The poll task wakes every 10 ms, fetches motion and switch state from
//!    the PIM447 and logs any non-zero deltas, scaled for the current mode.
//! 2. A mode key on GP15 is pressed.
//! 3. The mode key task calls `on_pressed(MOVE_TOGGLE)` on its
//!    `ModeCoordinator`, which flips the mode and pushes the new mode and
//!    LED color to the shared trackball.
//!
//! No USB HID reporting is implemented in this stage.

#![no_std]
#![no_main]

use defmt::*;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_embedded_hal::shared_bus::I2cDeviceError;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use trackball_driver::{
    Channel, Mode, Rgb, Trackball, TrackballConfig, TrackballError, DEFAULT_ADDRESS,
};
use trackball_mode::mode_coordinator::{ModeConfig, ModeCoordinator, TrackballLink, MOVE_TOGGLE};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Shared I2C0 bus. Other peripherals can join it through their own
/// I2cDevice wrappers.
static I2C_BUS: StaticCell<
    Mutex<CriticalSectionRawMutex, I2c<'static, I2C0, i2c::Async>>,
> = StaticCell::new();

/// The trackball driver, polled by one task and reconfigured by another.
static TRACKBALL: StaticCell<Mutex<CriticalSectionRawMutex, Trackball<TrackballI2c>>> =
    StaticCell::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for the trackball, sharing I2C_BUS.
type TrackballI2c = I2cDevice<
    'static,
    CriticalSectionRawMutex,
    I2c<'static, I2C0, i2c::Async>,
>;

type SharedMutex = Mutex<CriticalSectionRawMutex, Trackball<TrackballI2c>>;

/// Poll interval for motion registers.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Mode key settle time after each edge.
const DEBOUNCE: Duration = Duration::from_millis(20);

// ---------------------------------------------------------------------------
// Coordinator link
// ---------------------------------------------------------------------------

/// `TrackballLink` over the mutex-guarded driver.
///
/// The lock is held only for the duration of a single update.
struct SharedTrackball {
    trackball: &'static SharedMutex,
    ready: bool,
}

impl TrackballLink for SharedTrackball {
    type Error = TrackballError<I2cDeviceError<i2c::Error>>;

    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        self.trackball.lock().await.set_mode(mode);
        Ok(())
    }

    async fn set_led(&mut self, rgb: Rgb) -> Result<(), Self::Error> {
        self.trackball.lock().await.set_led(rgb).await
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Periodic motion polling task.
///
/// Deltas are already scaled by the driver for whatever mode the
/// coordinator last selected.
#[embassy_executor::task]
async fn poll_task(trackball: &'static SharedMutex) {
    info!("Trackball poll task started");

    let mut ticker = Ticker::every(POLL_INTERVAL);
    let mut last_button = 0u8;

    loop {
        ticker.next().await;

        let state = {
            let mut trackball = trackball.lock().await;
            if let Err(e) = trackball.fetch(Channel::All).await {
                error!("Trackball fetch failed: {}", Debug2Format(&e));
                continue;
            }
            trackball.state()
        };

        if state.dx != 0 || state.dy != 0 {
            debug!("{}: dx={}, dy={}", state.mode.as_str(), state.dx, state.dy);
        }

        if state.button_state != last_button {
            debug!("Switch register: {=u8:#04x}", state.button_state);
            last_button = state.button_state;
        }
    }
}

/// Mode key task. The key is active-low with the internal pull-up.
#[embassy_executor::task]
async fn mode_key_task(
    mut key: Input<'static>,
    mut coordinator: ModeCoordinator<SharedTrackball>,
) {
    info!("Mode key task started");

    loop {
        key.wait_for_falling_edge().await;
        match coordinator.on_pressed(MOVE_TOGGLE).await {
            Ok(mode) => info!("Mode key: {}", mode.as_str()),
            Err(e) => warn!("Mode switch incomplete: {}", Debug2Format(&e)),
        }
        Timer::after(DEBOUNCE).await;

        key.wait_for_rising_edge().await;
        coordinator.on_released(MOVE_TOGGLE);
        Timer::after(DEBOUNCE).await;
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("trackball-hw-interface starting");

    // ── Pin assignments ────────────────────────────────────────────────────
    // I2C_SDA  → GP20  (p.PIN_20)
    // I2C_SCL  → GP21  (p.PIN_21)
    // MODE_KEY → GP15  (p.PIN_15)  active-low, pull-up enabled
    // ───────────────────────────────────────────────────────────────────────

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );
    let i2c_bus = I2C_BUS.init(Mutex::new(i2c));

    // ── Trackball initialisation ───────────────────────────────────────────

    let mut trackball = Trackball::new(
        I2cDevice::new(i2c_bus),
        DEFAULT_ADDRESS,
        TrackballConfig::default(),
    );

    // On failure the trackball stays not-ready; the coordinator then runs
    // without LED feedback and the poll task keeps logging fetch errors.
    if let Err(e) = trackball.init().await {
        error!("Trackball init failed: {}", Debug2Format(&e));
    }
    let ready = trackball.is_ready();
    let trackball = TRACKBALL.init(Mutex::new(trackball));

    // ── Mode coordinator ───────────────────────────────────────────────────

    let mut coordinator = ModeCoordinator::new(
        ModeConfig::default(),
        Some(SharedTrackball { trackball, ready }),
    );
    if let Err(e) = coordinator.init().await {
        warn!("Mode coordinator init: {}", Debug2Format(&e));
    }

    let mode_key = Input::new(p.PIN_15, Pull::Up);

    // ── Spawn tasks ────────────────────────────────────────────────────────

    spawner.spawn(poll_task(trackball)).unwrap();
    spawner.spawn(mode_key_task(mode_key, coordinator)).unwrap();

    info!("All tasks spawned");
}
