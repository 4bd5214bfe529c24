//! Timer / mode state machine.
//!
//! Owns everything that changes while the device runs: mode, phase,
//! remaining time, the run flag, the custom preset cursor, the sound flag
//! and the timestamp of the last button C press. Every mutation goes
//! through one of the event handlers below; the loop driver only reads.
//!
//! Button map:
//!   - A - start / stop
//!   - B - stopped: switch Pomodoro <-> Custom; running: sound on/off
//!   - C - single press: next custom preset; double press: reset

#[cfg(test)]
mod tests;

use crate::config::{TimerConfig, DOUBLE_PRESS_WINDOW_MS};

/// Top-level operating mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Alternating work / break cycle, repeats forever.
    Pomodoro,
    /// Single countdown from the selected preset, stops at zero.
    Custom,
}

/// Pomodoro sub-state. Kept but not consulted in `Mode::Custom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    fn flipped(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }
}

/// What button B did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeButton {
    /// Timer was running: only the sound flag changed (new value).
    SoundToggled(bool),
    /// Timer was stopped: mode changed (new mode).
    ModeSwitched(Mode),
}

/// What button C did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvanceButton {
    /// Second press inside the double-press window: stopped and rewound.
    Reset,
    /// Single press in Custom mode: moved to preset `index`.
    PresetAdvanced(usize),
    /// Single press in Pomodoro mode has no effect.
    Ignored,
}

/// How a countdown ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExpiryKind {
    /// Pomodoro rolled over into the given phase and keeps running.
    PhaseChanged(Phase),
    /// Custom countdown reached zero and stopped.
    Stopped,
}

/// Reported by [`TimerState::tick`] when the countdown hits zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Expiry {
    pub kind: ExpiryKind,
    /// Play the completion chime (sound was enabled at expiry).
    pub chime: bool,
}

/// Snapshot of what the screen should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub remaining_secs: u32,
    pub total_secs: u32,
    pub phase: Phase,
    pub mode: Mode,
}

/// The whole mutable state of the device.
#[derive(Clone, Debug)]
pub struct TimerState {
    config: TimerConfig,
    mode: Mode,
    phase: Phase,
    remaining_secs: u32,
    running: bool,
    custom_index: usize,
    sound_enabled: bool,
    /// `None` until the first button C press.
    last_advance_press_ms: Option<u64>,
}

impl TimerState {
    /// Power-on state: Pomodoro, Work, full work duration, stopped, sound on.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            mode: Mode::Pomodoro,
            phase: Phase::Work,
            remaining_secs: config.work_secs(),
            running: false,
            custom_index: 0,
            sound_enabled: true,
            last_advance_press_ms: None,
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn custom_index(&self) -> usize {
        self.custom_index
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Full length of the current countdown, derived from mode / phase /
    /// preset index every time rather than stored.
    pub fn total_secs(&self) -> u32 {
        match self.mode {
            Mode::Pomodoro => self.phase_secs(self.phase),
            Mode::Custom => self.config.preset_secs(self.custom_index),
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            phase: self.phase,
            mode: self.mode,
        }
    }

    /// Button A: start or stop the countdown. Nothing else changes.
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
        info!("timer: running={}", self.running);
    }

    /// Button B. While running this only toggles the sound flag so a
    /// countdown can never lose its mode by accident; while stopped it
    /// switches mode and loads the new mode's full duration.
    pub fn on_mode_or_sound(&mut self) -> ModeButton {
        if self.running {
            self.sound_enabled = !self.sound_enabled;
            info!("timer: sound_enabled={}", self.sound_enabled);
            return ModeButton::SoundToggled(self.sound_enabled);
        }

        self.mode = match self.mode {
            Mode::Pomodoro => Mode::Custom,
            Mode::Custom => {
                self.phase = Phase::Work;
                Mode::Pomodoro
            }
        };
        self.remaining_secs = self.total_secs();
        info!("timer: mode -> {}", self.mode);
        ModeButton::ModeSwitched(self.mode)
    }

    /// Button C, pressed at monotonic time `now_ms`.
    ///
    /// A press strictly less than [`DOUBLE_PRESS_WINDOW_MS`] after the
    /// previous one is a double press: stop and rewind the current
    /// countdown. Otherwise, in Custom mode, step to the next preset.
    /// The press time is recorded after the comparison either way.
    pub fn on_advance_or_reset(&mut self, now_ms: u64) -> AdvanceButton {
        let double = match self.last_advance_press_ms {
            Some(last) => now_ms.saturating_sub(last) < DOUBLE_PRESS_WINDOW_MS,
            None => false,
        };

        let outcome = if double {
            self.running = false;
            self.remaining_secs = self.total_secs();
            info!("timer: reset to {=u32}s", self.remaining_secs);
            AdvanceButton::Reset
        } else {
            match self.mode {
                Mode::Custom => {
                    self.custom_index = (self.custom_index + 1) % self.config.presets().len();
                    self.remaining_secs = self.total_secs();
                    info!(
                        "timer: preset {=usize} ({=u32}s)",
                        self.custom_index, self.remaining_secs
                    );
                    AdvanceButton::PresetAdvanced(self.custom_index)
                }
                Mode::Pomodoro => AdvanceButton::Ignored,
            }
        };

        self.last_advance_press_ms = Some(now_ms);
        outcome
    }

    /// One elapsed second. Only meaningful while running; a stray call
    /// while stopped is ignored.
    ///
    /// Returns `Some` exactly once per countdown reaching zero.
    pub fn tick(&mut self) -> Option<Expiry> {
        if !self.running {
            warn!("timer: tick while stopped ignored");
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let kind = match self.mode {
            Mode::Pomodoro => {
                self.phase = self.phase.flipped();
                self.remaining_secs = self.phase_secs(self.phase);
                info!("timer: phase -> {}", self.phase);
                ExpiryKind::PhaseChanged(self.phase)
            }
            Mode::Custom => {
                self.running = false;
                info!("timer: countdown finished");
                ExpiryKind::Stopped
            }
        };

        Some(Expiry {
            kind,
            chime: self.sound_enabled,
        })
    }

    fn phase_secs(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.config.work_secs(),
            Phase::Break => self.config.break_secs(),
        }
    }
}
