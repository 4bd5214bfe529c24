//! Unit tests for the timer state machine.
//!
//! These tests run on the host (not embedded) and poke private fields
//! directly to set up mid-countdown situations.

use super::*;
use crate::config::{TimerConfig, BREAK_SECS, CUSTOM_PRESETS_SECS, WORK_SECS};

fn fresh() -> TimerState {
    TimerState::new(TimerConfig::reference())
}

fn custom() -> TimerState {
    let mut t = fresh();
    assert_eq!(t.on_mode_or_sound(), ModeButton::ModeSwitched(Mode::Custom));
    t
}

// ═══════════════════════════════════════════════════════════════════════════
// Power-on state
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn power_on_state() {
    let t = fresh();
    assert_eq!(t.mode(), Mode::Pomodoro);
    assert_eq!(t.phase(), Phase::Work);
    assert_eq!(t.remaining_secs(), WORK_SECS);
    assert_eq!(t.total_secs(), WORK_SECS);
    assert!(!t.is_running());
    assert!(t.sound_enabled());
    assert_eq!(t.custom_index(), 0);
    assert_eq!(t.last_advance_press_ms, None);
}

// ═══════════════════════════════════════════════════════════════════════════
// Button A
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn toggle_run_only_flips_flag() {
    let mut t = fresh();
    t.toggle_run();
    assert!(t.is_running());
    assert_eq!(t.remaining_secs(), WORK_SECS);
    assert_eq!(t.mode(), Mode::Pomodoro);
    t.toggle_run();
    assert!(!t.is_running());
}

// ═══════════════════════════════════════════════════════════════════════════
// Button B
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn mode_button_while_running_toggles_sound_only() {
    let mut t = fresh();
    t.toggle_run();
    t.remaining_secs = 700;

    assert_eq!(t.on_mode_or_sound(), ModeButton::SoundToggled(false));
    assert_eq!(t.mode(), Mode::Pomodoro);
    assert!(!t.sound_enabled());
    assert_eq!(t.remaining_secs(), 700);
    assert!(t.is_running());

    assert_eq!(t.on_mode_or_sound(), ModeButton::SoundToggled(true));
    assert!(t.sound_enabled());
}

#[test]
fn mode_button_while_running_in_custom_keeps_custom() {
    let mut t = custom();
    t.toggle_run();
    t.on_mode_or_sound();
    assert_eq!(t.mode(), Mode::Custom);
    assert!(!t.sound_enabled());
}

#[test]
fn switch_to_custom_loads_current_preset() {
    let mut t = fresh();
    t.custom_index = 4;
    t.on_mode_or_sound();
    assert_eq!(t.mode(), Mode::Custom);
    assert_eq!(t.remaining_secs(), 600);
    assert_eq!(t.total_secs(), 600);
}

#[test]
fn custom_and_back_restores_work() {
    for index in 0..CUSTOM_PRESETS_SECS.len() {
        let mut t = fresh();
        t.phase = Phase::Break;
        t.remaining_secs = 17;
        t.on_mode_or_sound();
        t.custom_index = index;
        t.remaining_secs = 3;

        assert_eq!(t.on_mode_or_sound(), ModeButton::ModeSwitched(Mode::Pomodoro));
        assert_eq!(t.remaining_secs(), WORK_SECS);
        assert_eq!(t.phase(), Phase::Work);
    }
}

#[test]
fn custom_mode_keeps_phase_inert() {
    let mut t = fresh();
    t.phase = Phase::Break;
    t.on_mode_or_sound();
    assert_eq!(t.phase(), Phase::Break);
    assert_eq!(t.total_secs(), CUSTOM_PRESETS_SECS[0]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Button C
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn first_press_is_never_a_double_press() {
    let mut t = custom();
    // Even at t=0 the missing previous press counts as "long ago".
    assert_eq!(t.on_advance_or_reset(0), AdvanceButton::PresetAdvanced(1));
    assert_eq!(t.last_advance_press_ms, Some(0));
}

#[test]
fn single_press_in_custom_advances_preset() {
    let mut t = custom();
    assert_eq!(t.on_advance_or_reset(10_000), AdvanceButton::PresetAdvanced(1));
    assert_eq!(t.custom_index(), 1);
    assert_eq!(t.remaining_secs(), 60);
    assert_eq!(t.on_advance_or_reset(20_000), AdvanceButton::PresetAdvanced(2));
    assert_eq!(t.remaining_secs(), 180);
}

#[test]
fn advance_wraps_after_last_preset() {
    let mut t = custom();
    t.custom_index = 8;
    assert_eq!(t.on_advance_or_reset(5_000), AdvanceButton::PresetAdvanced(0));
    assert_eq!(t.custom_index(), 0);
    assert_eq!(t.remaining_secs(), 30);
}

#[test]
fn single_press_in_pomodoro_is_a_no_op() {
    let mut t = fresh();
    t.remaining_secs = 1234;
    assert_eq!(t.on_advance_or_reset(5_000), AdvanceButton::Ignored);
    assert_eq!(t.remaining_secs(), 1234);
    assert_eq!(t.custom_index(), 0);
    assert_eq!(t.last_advance_press_ms, Some(5_000));
}

#[test]
fn double_press_at_499ms_resets() {
    let mut t = custom();
    t.on_advance_or_reset(1_000);
    t.toggle_run();
    t.remaining_secs = 12;

    assert_eq!(t.on_advance_or_reset(1_499), AdvanceButton::Reset);
    assert!(!t.is_running());
    assert_eq!(t.custom_index(), 1);
    assert_eq!(t.remaining_secs(), 60);
}

#[test]
fn presses_500ms_apart_are_two_singles() {
    let mut t = custom();
    t.on_advance_or_reset(1_000);
    assert_eq!(t.on_advance_or_reset(1_500), AdvanceButton::PresetAdvanced(2));
    assert_eq!(t.on_advance_or_reset(2_100), AdvanceButton::PresetAdvanced(3));
}

#[test]
fn double_press_window_compares_against_previous_press() {
    let mut t = custom();
    t.on_advance_or_reset(1_000);
    assert_eq!(t.on_advance_or_reset(1_400), AdvanceButton::Reset);
    // Third press is 400 ms after the second one, so it is a double press
    // again even though it is 800 ms after the first.
    assert_eq!(t.on_advance_or_reset(1_800), AdvanceButton::Reset);
}

#[test]
fn double_press_in_pomodoro_respects_phase() {
    let mut t = fresh();
    t.phase = Phase::Break;
    t.remaining_secs = 42;
    t.running = true;
    t.on_advance_or_reset(0);
    assert_eq!(t.on_advance_or_reset(100), AdvanceButton::Reset);
    assert_eq!(t.phase(), Phase::Break);
    assert_eq!(t.remaining_secs(), BREAK_SECS);
    assert!(!t.is_running());
}

// ═══════════════════════════════════════════════════════════════════════════
// Tick
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn tick_counts_down() {
    let mut t = fresh();
    t.toggle_run();
    assert_eq!(t.tick(), None);
    assert_eq!(t.remaining_secs(), WORK_SECS - 1);
}

#[test]
fn tick_while_stopped_is_ignored() {
    let mut t = fresh();
    assert_eq!(t.tick(), None);
    assert_eq!(t.remaining_secs(), WORK_SECS);
}

#[test]
fn pomodoro_work_expiry_rolls_into_break() {
    let mut t = fresh();
    t.remaining_secs = 1;
    t.running = true;

    let expiry = t.tick().expect("expiry");
    assert_eq!(expiry.kind, ExpiryKind::PhaseChanged(Phase::Break));
    assert!(expiry.chime);
    assert_eq!(t.phase(), Phase::Break);
    assert_eq!(t.remaining_secs(), 300);
    assert!(t.is_running());

    // Next tick is an ordinary countdown second, no second expiry.
    assert_eq!(t.tick(), None);
    assert_eq!(t.remaining_secs(), 299);
}

#[test]
fn pomodoro_break_expiry_rolls_into_work() {
    let mut t = fresh();
    t.phase = Phase::Break;
    t.remaining_secs = 1;
    t.running = true;
    t.sound_enabled = false;

    let expiry = t.tick().expect("expiry");
    assert_eq!(expiry.kind, ExpiryKind::PhaseChanged(Phase::Work));
    assert!(!expiry.chime);
    assert_eq!(t.remaining_secs(), WORK_SECS);
}

#[test]
fn custom_expiry_stops() {
    let mut t = custom();
    t.remaining_secs = 1;
    t.running = true;

    let expiry = t.tick().expect("expiry");
    assert_eq!(expiry.kind, ExpiryKind::Stopped);
    assert_eq!(t.remaining_secs(), 0);
    assert!(!t.is_running());

    // Stopped: no auto-restart.
    assert_eq!(t.tick(), None);
    assert_eq!(t.remaining_secs(), 0);
}

#[test]
fn restart_from_zero_expires_on_next_tick() {
    let mut t = custom();
    t.remaining_secs = 0;
    t.toggle_run();
    let expiry = t.tick().expect("expiry");
    assert_eq!(expiry.kind, ExpiryKind::Stopped);
    assert_eq!(t.remaining_secs(), 0);
}

#[test]
fn remaining_never_exceeds_total() {
    let mut t = fresh();
    t.toggle_run();
    for _ in 0..(WORK_SECS + BREAK_SECS + 10) {
        t.tick();
        assert!(t.remaining_secs() <= t.total_secs());
        assert!(t.remaining_secs() > 0);
    }
}

#[test]
fn frame_reflects_state() {
    let mut t = custom();
    t.on_advance_or_reset(0);
    let frame = t.frame();
    assert_eq!(frame.mode, Mode::Custom);
    assert_eq!(frame.remaining_secs, 60);
    assert_eq!(frame.total_secs, 60);
}
