//! Game state and core simulation types
//!
//! Everything the renderer reads and the tick mutates lives here. The whole
//! session state is serializable so a run can be snapshotted and replayed.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::serve_velocity;
use crate::tuning::Tuning;

/// Which side of the pitch a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Player paddle, left goal line
    Left,
    /// NPC paddle, right goal line
    Right,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick (the sim is frame-locked, not dt-scaled)
    pub vel: Vec2,
    /// Mutable at runtime via the grow/shrink cheats
    pub radius: f32,
}

impl Ball {
    pub fn new(pitch: &Pitch, radius: f32) -> Self {
        Self {
            pos: pitch.center(),
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Put the ball back in the middle of the pitch
    pub fn recenter(&mut self, pitch: &Pitch) {
        self.pos = pitch.center();
    }

    /// Speed magnitude (Euclidean norm of velocity)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A paddle: x is fixed per side, y is the only moving part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height * 0.5
    }

    /// Center the paddle vertically on the pitch
    pub fn center_vertically(&mut self, pitch: &Pitch) {
        self.y = pitch.height * 0.5 - self.height * 0.5;
    }

    /// Clamp y so the whole paddle stays on the pitch
    pub fn clamp_to(&mut self, pitch: &Pitch) {
        self.y = self.y.clamp(0.0, pitch.height - self.height);
    }
}

/// The playing field; immutable for the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub width: f32,
    pub height: f32,
}

impl Pitch {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Vertical midline separating the two paddle sides
    #[inline]
    pub fn midline(&self) -> f32 {
        self.width * 0.5
    }
}

/// Per-side goal counters; persist for the whole session, never reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Fixed-duration countdown with a one-way terminal transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchClock {
    /// Absolute timestamp at which the match ends
    pub end_at_ms: f64,
    over: bool,
}

impl MatchClock {
    pub fn new(now_ms: f64, duration_ms: f64) -> Self {
        Self {
            end_at_ms: now_ms + duration_ms,
            over: false,
        }
    }

    /// Latch the terminal state; true only on the tick it first triggers
    pub fn update(&mut self, now_ms: f64) -> bool {
        if !self.over && now_ms >= self.end_at_ms {
            self.over = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Milliseconds left on the countdown, floored at zero
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        if self.over {
            0.0
        } else {
            (self.end_at_ms - now_ms).max(0.0)
        }
    }
}

/// RNG state wrapper for serialization
///
/// Each serve derives a fresh PCG stream, so the persisted state stays a
/// pair of integers instead of raw generator internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Generator for the next serve
    pub fn next_rng(&mut self) -> Pcg32 {
        self.draws += 1;
        Pcg32::new(self.seed, self.draws)
    }
}

/// Complete session state, owned by the frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// The playing field
    pub pitch: Pitch,
    pub ball: Ball,
    /// Left paddle, pointer-controlled
    pub player: Paddle,
    /// Right paddle, driven by the tracking controller
    pub npc: Paddle,
    pub scores: Scoreboard,
    pub clock: MatchClock,
    /// NPC tracking is suppressed while now < this timestamp
    pub npc_frozen_until_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a session: paddles vertically centered, ball served from the
    /// middle with a random velocity, countdown armed from `now_ms`
    pub fn new(seed: u64, now_ms: f64, tuning: &Tuning) -> Self {
        let pitch = Pitch {
            width: tuning.pitch_width,
            height: tuning.pitch_height,
        };

        let mut player = Paddle {
            x: tuning.paddle_padding,
            y: 0.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        };
        let mut npc = Paddle {
            x: pitch.width - tuning.paddle_padding - tuning.paddle_width,
            y: 0.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        };
        player.center_vertically(&pitch);
        npc.center_vertically(&pitch);

        let mut rng_state = RngState::new(seed);
        let mut ball = Ball::new(&pitch, tuning.ball_radius);
        ball.vel = serve_velocity(
            &mut rng_state.next_rng(),
            tuning.min_serve_speed,
            tuning.max_serve_speed,
        );

        Self {
            seed,
            rng_state,
            pitch,
            ball,
            player,
            npc,
            scores: Scoreboard::default(),
            clock: MatchClock::new(now_ms, tuning.match_duration_ms),
            npc_frozen_until_ms: 0.0,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn is_npc_frozen(&self, now_ms: f64) -> bool {
        now_ms < self.npc_frozen_until_ms
    }
}
