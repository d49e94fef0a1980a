//! Simple trackball example
//!
//! Demonstrates basic usage of the trackball-driver crate on the Raspberry
//! Pi Pico 2. Polls the trackball every 10 ms and logs any motion or switch
//! change via defmt. Pressing the trackball flips between move and scroll
//! mode and recolors the LED.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | I2C0 SDA  | GP20       |                              |
//! | I2C0 SCL  | GP21       |                              |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use trackball_driver::{
    preset_to_rgb, Channel, ColorPreset, Mode, Trackball, TrackballConfig, DEFAULT_ADDRESS,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Bit 7 of the switch register is set while the ball is held down.
const SWITCH_PRESSED: u8 = 0x80;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // --- Trackball ---
    let config = TrackballConfig {
        scroll_factor: 2,
        boot_led: ColorPreset::Green.rgb(),
        ..TrackballConfig::default()
    };
    let mut trackball = Trackball::new(i2c, DEFAULT_ADDRESS, config);

    if let Err(e) = trackball.init().await {
        error!("Trackball init failed: {}", e);
    }

    info!("Trackball example started, roll the ball to see deltas");

    let mut ticker = Ticker::every(Duration::from_millis(10));
    let mut was_pressed = false;

    loop {
        ticker.next().await;

        if let Err(e) = trackball.fetch(Channel::All).await {
            error!("Fetch failed: {}", e);
            continue;
        }

        let state = trackball.state();
        if state.dx != 0 || state.dy != 0 {
            info!("dx={} dy={} ({})", state.dx, state.dy, state.mode.as_str());
        }

        // Flip mode on the press edge only, not while held.
        let pressed = state.button_state & SWITCH_PRESSED != 0;
        if pressed && !was_pressed {
            let mode = state.mode.toggled();
            trackball.set_mode(mode);

            let preset = match mode {
                Mode::Move => ColorPreset::Green,
                Mode::Scroll => ColorPreset::Blue,
            };
            if let Err(e) = trackball.set_led(preset_to_rgb(preset.index().into())).await {
                error!("LED update failed: {}", e);
            }
        }
        was_pressed = pressed;
    }
}
