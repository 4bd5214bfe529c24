//! Host-testable library for pomobar.
//!
//! This crate holds everything that does not touch hardware: the timer
//! state machine, the progress bar layout, the differential renderer and
//! the loop driver that ties them to the display / speaker / clock
//! collaborators.
//!
//! Usage: `cargo test --lib` and `cargo test --test integration`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! (build with `--features embedded` for thumbv7em-none-eabihf).
//! This lib.rs provides the shared logic and a host entry point for tests.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod alert;
pub mod config;
pub mod controller;
pub mod error;
pub mod hal;
pub mod timer;

pub use config::TimerConfig;
pub use controller::Controller;
pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// UI Module Re-exports
// ═══════════════════════════════════════════════════════════════════════════

// Internal module paths for the actual implementations
#[path = "ui/layout.rs"]
mod ui_layout_impl;
#[path = "ui/render.rs"]
mod ui_render_impl;
#[path = "ui/surface.rs"]
mod ui_surface_impl;

pub mod ui {
    /// The three physical buttons, left to right.
    ///
    ///   - A: start / stop
    ///   - B: mode (stopped) or sound (running)
    ///   - C: next preset, double press resets
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Button {
        A,
        B,
        C,
    }

    /// A debounced press and the monotonic time it was seen at.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct ButtonPress {
        pub button: Button,
        pub at_ms: u64,
    }

    impl ButtonPress {
        pub fn new(button: Button, at_ms: u64) -> Self {
            Self { button, at_ms }
        }
    }

    pub mod layout {
        pub use crate::ui_layout_impl::BarLayout;
    }

    pub mod render {
        pub use crate::ui_render_impl::{
            format_clock, mode_line, sound_line, PhaseLabel, Renderer, CLOCK_TEXT_CAP,
        };
    }

    pub mod surface {
        pub use crate::ui_surface_impl::{
            Font, GraphicsSurface, Surface, BACKGROUND, BREAK_BLUE, CUSTOM_ORANGE, FOREGROUND,
            WORK_GREEN,
        };
    }
}
