//! Unified error type for pomobar.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Configuration
    /// The custom preset list is empty, so cycling through it is undefined.
    EmptyPresets,

    /// A work, break or preset duration is zero seconds.
    ZeroDuration,

    /// Progress bar geometry leaves no room for the segments.
    BarGeometry,

    // Collaborators
    /// The display driver rejected a draw call.
    Display,

    /// The speaker / PWM driver failed.
    Audio,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::EmptyPresets => "custom preset list is empty",
            Error::ZeroDuration => "timer duration must be at least one second",
            Error::BarGeometry => "progress bar segments do not fit the bar width",
            Error::Display => "display draw failed",
            Error::Audio => "speaker output failed",
        };
        f.write_str(msg)
    }
}
