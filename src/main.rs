//! pomobar firmware for nRF52840.
//!
//! Pomodoro / countdown timer with a segmented progress bar on a
//! 320x240 ILI9342C TFT, three buttons and a piezo buzzer.
//!
//! # Wiring (nRF52840-DK)
//!
//!   Button A       → P0.11
//!   Button B       → P0.12
//!   Button C       → P0.24
//!   TFT SCK        → P1.15
//!   TFT MOSI       → P1.13
//!   TFT CS         → P1.12
//!   TFT DC         → P1.14
//!   TFT RST        → P1.10
//!   TFT backlight  → P1.11
//!   Buzzer (PWM0)  → P1.08
//!
//! # Tasks
//!
//! - three button tasks push timestamped presses into `PRESSES`
//! - `main` owns the `Controller` and is the only code that touches timer
//!   state: it waits for either the next press or, while running, the next
//!   one-second tick

#![no_std]
#![no_main]

// Modules only used in the binary (not testable on host)
mod clock;
mod speaker;
mod ui;

// Re-export testable modules from library for local use
mod config {
    pub use pomobar::config::*;
}

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::{bind_interrupts, peripherals, spim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Delay, Duration, Ticker};
use embedded_hal_bus::spi::ExclusiveDevice;
use {defmt_rtt as _, panic_probe as _};

use pomobar::{Controller, TimerConfig};

use crate::clock::EmbassyClock;
use crate::config::TICK_PERIOD_MS;
use crate::speaker::PwmSpeaker;
use crate::ui::buttons::PRESS_QUEUE_DEPTH;
use crate::ui::{Button, ButtonPress};

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

/// Debounced presses from the button tasks to the controller.
static PRESSES: Channel<CriticalSectionRawMutex, ButtonPress, PRESS_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task(pool_size = 3)]
async fn button(pin: AnyPin, button: Button) {
    ui::buttons::button_task(pin, button, &PRESSES.sender()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pomobar starting");

    let config = TimerConfig::reference();

    spawner.must_spawn(button(p.P0_11.degrade(), Button::A));
    spawner.must_spawn(button(p.P0_12.degrade(), Button::B));
    spawner.must_spawn(button(p.P0_24.degrade(), Button::C));

    // Display
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M8;
    let spi_bus = spim::Spim::new_txonly(p.SPI3, Irqs, p.P1_15, p.P1_13, spi_config);
    let cs = Output::new(p.P1_12, Level::High, OutputDrive::Standard);
    let spi = unwrap!(ExclusiveDevice::new(spi_bus, cs, Delay));
    let dc = Output::new(p.P1_14, Level::Low, OutputDrive::Standard);
    let rst = Output::new(p.P1_10, Level::High, OutputDrive::Standard);
    let _backlight = Output::new(p.P1_11, Level::High, OutputDrive::Standard);
    let surface = unwrap!(ui::display::init(spi, dc, rst, &mut Delay));

    // Buzzer
    let speaker = PwmSpeaker::new(SimplePwm::new_1ch(p.PWM0, p.P1_08));

    let mut controller = Controller::new(config, surface, speaker, EmbassyClock);
    unwrap!(controller.start());
    info!("pomobar ready");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(TICK_PERIOD_MS)));

    loop {
        if controller.state().is_running() {
            match select(ticker.next(), PRESSES.receive()).await {
                Either::First(()) => unwrap!(controller.on_second()),
                Either::Second(press) => unwrap!(controller.on_press(press)),
            }
        } else {
            let press = PRESSES.receive().await;
            unwrap!(controller.on_press(press));
            if controller.state().is_running() {
                // Full second before the first tick after a (re)start.
                ticker.reset();
            }
        }

        unwrap!(controller.refresh_sound_indicator());
    }
}
