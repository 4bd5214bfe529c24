//! User interface subsystem - SPI TFT + physical buttons.
//!
//! The pure parts (render differ, bar layout, surface trait) live in the
//! library; this module adds the hardware ends.
//!
//! ## Components
//!
//! - **Display**: ILI9342C 320×240 TFT via SPI (mipidsi)
//! - **Buttons**: 3 tactile switches with debouncing (A, B, C)

pub mod buttons;
pub mod display;

pub use pomobar::ui::{Button, ButtonPress};
