//! Application-wide constants and compile-time configuration.
//!
//! All durations, input timing, chime parameters and screen layout
//! live here so they can be tuned in one place.

use crate::error::Error;

// Timer durations

/// Pomodoro work phase length (seconds).
pub const WORK_SECS: u32 = 25 * 60;

/// Pomodoro break phase length (seconds).
pub const BREAK_SECS: u32 = 5 * 60;

/// Selectable countdown durations (seconds), cycled with button C.
pub const CUSTOM_PRESETS_SECS: [u32; 9] = [30, 60, 180, 300, 600, 900, 1800, 2700, 3600];

// Input timing

/// Two presses of button C closer than this (exclusive) count as a double press.
pub const DOUBLE_PRESS_WINDOW_MS: u64 = 500;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// Main loop

/// Countdown resolution: one tick per second.
pub const TICK_PERIOD_MS: u32 = 1000;

// Completion chime

/// Speaker volume used for the chime (0 = mute, 10 = loudest).
pub const CHIME_VOLUME: u8 = 1;

/// Chime pitch (Hz).
pub const CHIME_FREQ_HZ: u32 = 440;

/// Length of each of the two chime tones (ms).
pub const CHIME_TONE_MS: u32 = 200;

/// Silence between the two chime tones (ms).
pub const CHIME_GAP_MS: u32 = 300;

// Screen layout (320x240 landscape)
//
//   (50,10)   phase label      "Work Time"
//   (10,50)   progress bar     20 blocks, 300 px wide
//   (60,110)  clock            "25:00"
//   (10,200)  mode line        "Mode: Pomodoro"
//   (10,220)  sound line       "Sound: ON"

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

pub const BAR_X: i32 = 10;
pub const BAR_Y: i32 = 50;
pub const BAR_WIDTH: u32 = 300;
pub const BAR_HEIGHT: u32 = 40;
pub const BAR_SEGMENTS: u32 = 20;
pub const BAR_SPACING: u32 = 5;

pub const PHASE_LABEL_POS: (i32, i32) = (50, 10);
pub const CLOCK_POS: (i32, i32) = (60, 110);
pub const MODE_LINE_POS: (i32, i32) = (10, 200);
pub const SOUND_LINE_POS: (i32, i32) = (10, 220);

/// Durations the timer state machine works from.
///
/// Built once at startup. Validation happens here so that nothing later
/// has to guard against an empty preset list or a zero-length phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    work_secs: u32,
    break_secs: u32,
    presets: &'static [u32],
}

impl TimerConfig {
    /// Validate and bundle the timer durations.
    pub fn new(work_secs: u32, break_secs: u32, presets: &'static [u32]) -> Result<Self, Error> {
        if presets.is_empty() {
            return Err(Error::EmptyPresets);
        }
        if work_secs == 0 || break_secs == 0 || presets.contains(&0) {
            return Err(Error::ZeroDuration);
        }
        Ok(Self {
            work_secs,
            break_secs,
            presets,
        })
    }

    /// The shipped configuration: 25/5 Pomodoro and nine countdown presets.
    pub fn reference() -> Self {
        Self {
            work_secs: WORK_SECS,
            break_secs: BREAK_SECS,
            presets: &CUSTOM_PRESETS_SECS,
        }
    }

    pub fn work_secs(&self) -> u32 {
        self.work_secs
    }

    pub fn break_secs(&self) -> u32 {
        self.break_secs
    }

    pub fn presets(&self) -> &'static [u32] {
        self.presets
    }

    /// Duration of preset `index`. The index is reduced modulo the preset
    /// count, which is never zero.
    pub fn preset_secs(&self, index: usize) -> u32 {
        self.presets[index % self.presets.len()]
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::reference()
    }
}
