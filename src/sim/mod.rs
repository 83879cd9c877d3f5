//! Deterministic simulation module
//!
//! All gameplay logic lives here. No rendering or host dependencies:
//! timestamps and input arrive as plain data, randomness comes from the
//! session's seeded RNG state.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    BoundsEvent, deal_with_collision, keep_ball_on_pitch, move_ball, serve_velocity,
};
pub use state::{Ball, GameState, MatchClock, Paddle, Pitch, RngState, Scoreboard, Side};
pub use tick::{GameEvent, TickInput, tick};
