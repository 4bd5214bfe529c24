//! Main loop driver.
//!
//! `Controller` is the single owner of the timer state, the render cache
//! and the three collaborators. Button presses and elapsed seconds are fed
//! in one at a time from a single execution context, so no locking is
//! needed around the state.

use crate::alert;
use crate::config::{TimerConfig, TICK_PERIOD_MS};
use crate::error::Error;
use crate::hal::{Clock, Speaker};
use crate::timer::TimerState;
use crate::ui::{Button, ButtonPress};
use crate::ui_layout_impl::BarLayout;
use crate::ui_render_impl::Renderer;
use crate::ui_surface_impl::{Surface, BACKGROUND};

pub struct Controller<S, A, C> {
    state: TimerState,
    renderer: Renderer,
    surface: S,
    speaker: A,
    clock: C,
}

impl<S, A, C> Controller<S, A, C>
where
    S: Surface,
    A: Speaker,
    C: Clock,
{
    pub fn new(config: TimerConfig, surface: S, speaker: A, clock: C) -> Self {
        Self::with_layout(config, BarLayout::reference(), surface, speaker, clock)
    }

    pub fn with_layout(config: TimerConfig, bar: BarLayout, surface: S, speaker: A, clock: C) -> Self {
        Self {
            state: TimerState::new(config),
            renderer: Renderer::new(bar),
            surface,
            speaker,
            clock,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn speaker(&self) -> &A {
        &self.speaker
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Paint the initial screen: background, every region, sound line.
    pub fn start(&mut self) -> Result<(), Error> {
        self.surface.clear(BACKGROUND)?;
        self.renderer.invalidate();
        self.render()?;
        self.refresh_sound_indicator()
    }

    /// Dispatch one debounced button press, then update the screen.
    pub fn on_press(&mut self, press: ButtonPress) -> Result<(), Error> {
        debug!("controller: {} at {=u64}ms", press.button, press.at_ms);
        match press.button {
            Button::A => self.state.toggle_run(),
            Button::B => {
                self.state.on_mode_or_sound();
            }
            Button::C => {
                self.state.on_advance_or_reset(press.at_ms);
            }
        }
        self.render()
    }

    /// One second has elapsed while running.
    pub fn on_second(&mut self) -> Result<(), Error> {
        if let Some(expiry) = self.state.tick() {
            info!("controller: expired {}", expiry.kind);
            if expiry.chime {
                alert::play_completion(&mut self.speaker, &mut self.clock)?;
            }
        }
        self.render()
    }

    /// One pass of the blocking reference loop: if running, sleep a tick
    /// period and count it; always refresh the sound line.
    pub fn step(&mut self) -> Result<(), Error> {
        if self.state.is_running() {
            self.clock.sleep_ms(TICK_PERIOD_MS);
            self.on_second()?;
        }
        self.refresh_sound_indicator()
    }

    pub fn refresh_sound_indicator(&mut self) -> Result<(), Error> {
        self.renderer
            .refresh_sound(&mut self.surface, self.state.sound_enabled())
    }

    fn render(&mut self) -> Result<(), Error> {
        let frame = self.state.frame();
        self.renderer.render(&mut self.surface, &frame)
    }
}
