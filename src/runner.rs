//! Frame driver
//!
//! The original host called the game once per display refresh; here that
//! callback becomes an explicit seam. A `Clock` supplies timestamps, the
//! driver ticks the simulation, and a `Renderer` receives the full frame
//! every call - game over included, so the terminal overlay keeps drawing.

use std::time::Instant;

use crate::hud::HudModel;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Timestamp source, milliseconds
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock milliseconds since driver start
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Fixed-increment clock for headless runs and tests
pub struct SteppedClock {
    now_ms: f64,
    step_ms: f64,
}

impl SteppedClock {
    pub fn new(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
        }
    }
}

impl Clock for SteppedClock {
    fn now_ms(&mut self) -> f64 {
        let now = self.now_ms;
        self.now_ms += self.step_ms;
        now
    }
}

/// Rendering collaborator: gets the whole frame, redraws everything
pub trait Renderer {
    fn draw_frame(&mut self, state: &GameState, hud: &HudModel);
}

/// Renderer that draws nothing, for headless matches
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_frame(&mut self, _state: &GameState, _hud: &HudModel) {}
}

/// Owns the session and runs the per-refresh callback
pub struct Runner<C, R> {
    pub state: GameState,
    pub input: TickInput,
    tuning: Tuning,
    clock: C,
    renderer: R,
}

impl<C: Clock, R: Renderer> Runner<C, R> {
    pub fn new(seed: u64, tuning: Tuning, mut clock: C, renderer: R) -> Self {
        let now_ms = clock.now_ms();
        Self {
            state: GameState::new(seed, now_ms, &tuning),
            input: TickInput::default(),
            tuning,
            clock,
            renderer,
        }
    }

    /// One display-refresh callback: tick, log notable events, then render
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let now_ms = self.clock.now_ms();
        let input = self.input.clone();
        let events = tick(&mut self.state, &input, now_ms, &self.tuning);

        for event in &events {
            match event {
                GameEvent::Goal(side) => log::info!(
                    "goal for {side:?}, score {} - {}",
                    self.state.scores.left,
                    self.state.scores.right
                ),
                GameEvent::MatchOver => log::info!(
                    "match over, final score {} - {}",
                    self.state.scores.left,
                    self.state.scores.right
                ),
                _ => {}
            }
        }

        // One-shot cheats are consumed; the pointer position persists
        self.input.freeze_npc = false;
        self.input.snap_to_ball = false;
        self.input.grow_ball = false;
        self.input.shrink_ball = false;

        self.renderer
            .draw_frame(&self.state, &HudModel::new(&self.state, now_ms));

        events
    }

    pub fn is_over(&self) -> bool {
        self.state.clock.is_over()
    }
}
