//! GPIO button input with async debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - A - start / stop
//!   - B - mode (stopped) or sound on/off (running)
//!   - C - next preset; double press resets
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, stamps it with the monotonic clock and sends a
//! `ButtonPress` to the controller channel.

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::ui::{Button, ButtonPress};
use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Timer};

/// Depth of the press queue between button tasks and the controller.
pub const PRESS_QUEUE_DEPTH: usize = 4;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the press,
/// then waits for release before repeating.
pub async fn button_task(
    pin: AnyPin,
    button: Button,
    tx: &Sender<'static, CriticalSectionRawMutex, ButtonPress, PRESS_QUEUE_DEPTH>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            // Edge time, not post-debounce time.
            let at_ms = Instant::now().as_millis().saturating_sub(BUTTON_DEBOUNCE_MS);
            info!("Button: {} at {=u64}ms", button, at_ms);
            tx.send(ButtonPress::new(button, at_ms)).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
