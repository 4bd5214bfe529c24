//! Hardware collaborators the controller drives.
//!
//! The firmware binary implements these on top of Embassy; tests use
//! simple fakes. The display side lives in [`crate::ui::surface`].

use crate::error::Error;

/// Monotonic time source with a blocking sleep.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never goes backwards.
    fn now_ms(&self) -> u64;

    /// Block the caller for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}

/// Tone generator (passive buzzer / speaker).
pub trait Speaker {
    /// Output level, 0 (mute) ..= 10 (loudest).
    fn set_volume(&mut self, level: u8) -> Result<(), Error>;

    /// Play a square tone and return once it has finished.
    fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), Error>;
}
