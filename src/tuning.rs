//! Data-driven game balance
//!
//! Defaults mirror `crate::consts`; a JSON override can rebalance a build
//! without recompiling. The simulation reads every gameplay number from
//! here so tests can shrink a match to milliseconds.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// All gameplay tunables for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub pitch_width: f32,
    pub pitch_height: f32,

    pub paddle_padding: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,

    pub ball_radius: f32,
    pub min_ball_radius: f32,
    pub radius_step: f32,

    /// Per-axis serve magnitude range
    pub min_serve_speed: f32,
    pub max_serve_speed: f32,
    /// Hard cap on ball speed after paddle boosts
    pub max_ball_speed: f32,
    /// Multiplicative speed boost per paddle hit
    pub paddle_boost: f32,
    /// Deflection angle at the paddle's extreme edge (radians)
    pub max_deflect_angle: f32,

    pub npc_speed: f32,
    pub freeze_duration_ms: f64,

    pub match_duration_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            pitch_width: PITCH_WIDTH,
            pitch_height: PITCH_HEIGHT,
            paddle_padding: PADDLE_PADDING,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            min_ball_radius: MIN_BALL_RADIUS,
            radius_step: RADIUS_STEP,
            min_serve_speed: MIN_SERVE_SPEED,
            max_serve_speed: MAX_SERVE_SPEED,
            max_ball_speed: MAX_BALL_SPEED,
            paddle_boost: PADDLE_BOOST,
            max_deflect_angle: MAX_DEFLECT_ANGLE,
            npc_speed: NPC_SPEED,
            freeze_duration_ms: FREEZE_DURATION_MS,
            match_duration_ms: MATCH_DURATION_MS,
        }
    }
}

impl Tuning {
    /// Parse a JSON override; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.pitch_width, PITCH_WIDTH);
        assert_eq!(tuning.paddle_boost, PADDLE_BOOST);
        assert_eq!(tuning.max_deflect_angle, std::f32::consts::FRAC_PI_3);
        assert_eq!(tuning.match_duration_ms, 90_000.0);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{"npc_speed": 5.0, "match_duration_ms": 30000.0}"#)
            .expect("valid override");
        assert_eq!(tuning.npc_speed, 5.0);
        assert_eq!(tuning.match_duration_ms, 30_000.0);
        // Untouched fields keep their defaults
        assert_eq!(tuning.max_ball_speed, MAX_BALL_SPEED);
    }

    #[test]
    fn test_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
