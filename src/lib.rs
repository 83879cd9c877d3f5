//! Blitz Pong - a timed pong duel against a tracking NPC
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle collisions, match clock)
//! - `tuning`: Data-driven game balance
//! - `hud`: Read-only HUD view model for the rendering collaborator
//! - `runner`: Frame driver with injectable clock and renderer seams

pub mod hud;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Pitch dimensions
    pub const PITCH_WIDTH: f32 = 620.0;
    pub const PITCH_HEIGHT: f32 = 460.0;

    /// Paddle defaults - each paddle sits PADDLE_PADDING in from its goal line
    pub const PADDLE_PADDING: f32 = 10.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Smallest radius the shrink cheat can reach
    pub const MIN_BALL_RADIUS: f32 = 2.0;
    /// Radius change per grow/shrink cheat press
    pub const RADIUS_STEP: f32 = 5.0;

    /// Serve speed range (per-axis magnitude, pixels per tick)
    pub const MIN_SERVE_SPEED: f32 = 2.0;
    pub const MAX_SERVE_SPEED: f32 = 4.0;
    /// Maximum ball speed
    pub const MAX_BALL_SPEED: f32 = 9.0;
    /// Speed boost when ball hits a paddle (multiplicative, +6%)
    pub const PADDLE_BOOST: f32 = 1.06;
    /// Widest deflection angle off a paddle edge (radians)
    pub const MAX_DEFLECT_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// NPC tracking step per tick (pixels)
    pub const NPC_SPEED: f32 = 3.0;
    /// NPC freeze cheat duration
    pub const FREEZE_DURATION_MS: f64 = 2_000.0;

    /// Match length (90 real-time seconds)
    pub const MATCH_DURATION_MS: f64 = 90_000.0;
}
