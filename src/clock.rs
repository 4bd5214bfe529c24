//! `Clock` backed by the Embassy time driver (RTC1).

use embassy_time::{block_for, Duration, Instant};

use pomobar::hal::Clock;

#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    /// Busy-wait; only used for the gap inside the completion chime.
    fn sleep_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
