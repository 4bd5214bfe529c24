//! Differential renderer.
//!
//! Remembers what is currently on screen (phase label, clock value, bar
//! fill, mode line) and only talks to the [`Surface`] when one of those
//! changes. Calling [`Renderer::render`] twice with the same frame draws
//! nothing the second time.
//!
//! The sound line is the exception: [`Renderer::refresh_sound`] redraws it
//! unconditionally on every call.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use heapless::String;

use crate::config::{CLOCK_POS, MODE_LINE_POS, PHASE_LABEL_POS, SOUND_LINE_POS};
use crate::error::Error;
use crate::timer::{Frame, Mode, Phase};
use crate::ui_layout_impl::BarLayout;
use crate::ui_surface_impl::{
    Font, Surface, BACKGROUND, BREAK_BLUE, CUSTOM_ORANGE, FOREGROUND, WORK_GREEN,
};

/// Capacity of a formatted clock string. Minutes are not clamped, so
/// "MMMMMMMM:SS" covers every `u32` second count.
pub const CLOCK_TEXT_CAP: usize = 12;

/// Characters cleared behind the clock before redrawing it.
const CLOCK_CLEAR_CHARS: u32 = 8;
/// "Custom Timer"
const LABEL_CLEAR_CHARS: u32 = 12;
/// "Mode: Custom Timer"
const MODE_CLEAR_CHARS: u32 = 18;
/// "Sound: OFF"
const SOUND_CLEAR_CHARS: u32 = 10;

/// Heading shown above the bar; also picks the accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseLabel {
    Work,
    Break,
    Custom,
}

impl PhaseLabel {
    /// Custom mode ignores the (inert) phase.
    pub fn for_frame(mode: Mode, phase: Phase) -> Self {
        match (mode, phase) {
            (Mode::Custom, _) => PhaseLabel::Custom,
            (Mode::Pomodoro, Phase::Work) => PhaseLabel::Work,
            (Mode::Pomodoro, Phase::Break) => PhaseLabel::Break,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            PhaseLabel::Work => "Work Time",
            PhaseLabel::Break => "Break Time",
            PhaseLabel::Custom => "Custom Timer",
        }
    }

    pub fn color(self) -> Rgb565 {
        match self {
            PhaseLabel::Work => WORK_GREEN,
            PhaseLabel::Break => BREAK_BLUE,
            PhaseLabel::Custom => CUSTOM_ORANGE,
        }
    }
}

pub fn mode_line(mode: Mode) -> &'static str {
    match mode {
        Mode::Pomodoro => "Mode: Pomodoro",
        Mode::Custom => "Mode: Custom Timer",
    }
}

pub fn sound_line(enabled: bool) -> &'static str {
    if enabled {
        "Sound: ON"
    } else {
        "Sound: OFF"
    }
}

/// Format seconds as zero-padded "MM:SS". Minutes are `secs / 60`
/// without wrapping, so 100 minutes prints as "100:00".
pub fn format_clock(secs: u32) -> String<CLOCK_TEXT_CAP> {
    let mut out = String::new();
    // Cannot overflow: u32::MAX / 60 has 8 digits.
    let _ = write!(out, "{:02}:{:02}", secs / 60, secs % 60);
    out
}

fn pos((x, y): (i32, i32)) -> Point {
    Point::new(x, y)
}

/// Redraw a text line: blank its box, then draw the new string.
fn draw_line<S: Surface>(
    surface: &mut S,
    at: (i32, i32),
    clear_chars: u32,
    text: &str,
    font: Font,
    color: Rgb565,
) -> Result<(), Error> {
    let origin = pos(at);
    surface.fill_rect(font.text_box(origin, clear_chars), BACKGROUND)?;
    surface.text(origin, text, font, color)
}

/// What has been drawn so far. `None` means "unknown, draw on next call".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct RenderCache {
    label: Option<PhaseLabel>,
    remaining: Option<u32>,
    /// Filled block count and the accent it was drawn in.
    bar: Option<(u32, PhaseLabel)>,
    mode: Option<Mode>,
}

pub struct Renderer {
    bar: BarLayout,
    cache: RenderCache,
}

impl Renderer {
    pub fn new(bar: BarLayout) -> Self {
        Self {
            bar,
            cache: RenderCache::default(),
        }
    }

    pub fn bar(&self) -> &BarLayout {
        &self.bar
    }

    /// Forget everything; the next `render` repaints every region.
    pub fn invalidate(&mut self) {
        self.cache = RenderCache::default();
    }

    /// Bring the screen in line with `frame`, touching only regions whose
    /// value changed since the previous call.
    pub fn render<S: Surface>(&mut self, surface: &mut S, frame: &Frame) -> Result<(), Error> {
        let label = PhaseLabel::for_frame(frame.mode, frame.phase);

        if self.cache.label != Some(label) {
            draw_line(
                surface,
                PHASE_LABEL_POS,
                LABEL_CLEAR_CHARS,
                label.text(),
                Font::Label,
                label.color(),
            )?;
            self.cache.label = Some(label);
        }

        if self.cache.remaining != Some(frame.remaining_secs) {
            let text = format_clock(frame.remaining_secs);
            draw_line(
                surface,
                CLOCK_POS,
                CLOCK_CLEAR_CHARS,
                &text,
                Font::Clock,
                FOREGROUND,
            )?;
            self.cache.remaining = Some(frame.remaining_secs);
        }

        let filled = self.bar.filled_segments(frame.remaining_secs, frame.total_secs);
        if self.cache.bar != Some((filled, label)) {
            self.draw_bar(surface, filled, label.color())?;
            self.cache.bar = Some((filled, label));
        }

        if self.cache.mode != Some(frame.mode) {
            draw_line(
                surface,
                MODE_LINE_POS,
                MODE_CLEAR_CHARS,
                mode_line(frame.mode),
                Font::Status,
                FOREGROUND,
            )?;
            self.cache.mode = Some(frame.mode);
        }

        Ok(())
    }

    /// Redraw the sound status line. Not cached.
    pub fn refresh_sound<S: Surface>(&self, surface: &mut S, enabled: bool) -> Result<(), Error> {
        draw_line(
            surface,
            SOUND_LINE_POS,
            SOUND_CLEAR_CHARS,
            sound_line(enabled),
            Font::Status,
            FOREGROUND,
        )
    }

    /// Whole bar: solid blocks first, then black blocks with a white
    /// outline (fill before outline).
    fn draw_bar<S: Surface>(&self, surface: &mut S, filled: u32, accent: Rgb565) -> Result<(), Error> {
        for index in 0..self.bar.segments() {
            let rect = self.bar.segment_rect(index);
            if index < filled {
                surface.fill_rect(rect, accent)?;
            } else {
                surface.fill_rect(rect, BACKGROUND)?;
                surface.outline_rect(rect, FOREGROUND)?;
            }
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(BarLayout::reference())
    }
}
