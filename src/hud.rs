//! HUD view model for the rendering collaborator
//!
//! The renderer fully redraws every frame; this is the read-only bundle it
//! consumes alongside the entity positions in `GameState`. Colors live here
//! rather than in the sim, which stays rendering-free.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Whole-seconds countdown label, ceiling-rounded, pinned at 0
pub fn format_remaining(remaining_ms: f64) -> String {
    let secs = (remaining_ms / 1000.0).ceil().max(0.0) as u64;
    format!("Time: {secs}")
}

/// Per-frame HUD snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudModel {
    pub left_score: u32,
    pub right_score: u32,
    pub time_label: String,
    /// When set, the renderer overlays the terminal "game over" banner
    pub match_over: bool,
}

impl HudModel {
    pub fn new(state: &GameState, now_ms: f64) -> Self {
        Self {
            left_score: state.scores.left,
            right_score: state.scores.right,
            time_label: format_remaining(state.clock.remaining_ms(now_ms)),
            match_over: state.clock.is_over(),
        }
    }
}

/// Display colors for the entity set, CSS-style hex strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub ball: String,
    pub player_paddle: String,
    pub npc_paddle: String,
    pub pitch: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ball: "#FFFFFF".into(),
            player_paddle: "#daff33".into(),
            npc_paddle: "#ff33e4".into(),
            pitch: "#000".into(),
        }
    }
}
