//! Per-frame simulation step
//!
//! Fixed update order while the match is live: clock gate, ball
//! integration, NPC tracking, bounds and goals, player paddle collision,
//! NPC paddle collision. Rendering is the driver's job and happens every
//! frame regardless of match state.

use super::collision::{self, BoundsEvent};
use super::state::{GameState, Side};
use crate::tuning::Tuning;

/// Input gathered by the host for a single tick
///
/// Pointer position and cheat keys arrive as host events; the driver folds
/// them into the next tick and clears the one-shot flags afterwards.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer-driven player paddle y; applied verbatim, not clamped
    pub cursor_y: Option<f32>,
    /// Cheat: freeze the NPC tracking step for a fixed window
    pub freeze_npc: bool,
    /// Cheat: teleport the player paddle to be centered on the ball (clamped)
    pub snap_to_ball: bool,
    /// Cheat: grow the ball radius one step
    pub grow_ball: bool,
    /// Cheat: shrink the ball radius one step, floored
    pub shrink_ball: bool,
}

/// Things that happened during a tick, for the rendering/audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The named side scored
    Goal(Side),
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball deflected off the named side's paddle
    PaddleHit(Side),
    /// The countdown hit zero; the session is now terminal
    MatchOver,
}

/// Advance the session by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    now_ms: f64,
    tuning: &Tuning,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Host events mutate state whether or not the match is live, matching
    // event-callback semantics: cheats still work on the final frame
    apply_input(state, input, now_ms, tuning);

    if state.clock.update(now_ms) {
        events.push(GameEvent::MatchOver);
    }
    if state.clock.is_over() {
        return events;
    }

    state.time_ticks += 1;

    collision::move_ball(&mut state.ball);
    drive_npc(state, now_ms, tuning);

    match collision::keep_ball_on_pitch(&mut state.ball, &state.pitch) {
        BoundsEvent::Goal(side) => {
            state.scores.award(side);
            state.ball.recenter(&state.pitch);
            let mut rng = state.rng_state.next_rng();
            state.ball.vel =
                collision::serve_velocity(&mut rng, tuning.min_serve_speed, tuning.max_serve_speed);
            events.push(GameEvent::Goal(side));
        }
        BoundsEvent::WallBounce => events.push(GameEvent::WallBounce),
        BoundsEvent::None => {}
    }

    // Player paddle first, then NPC - fixed order
    if collision::deal_with_collision(&state.player, &mut state.ball, &state.pitch, tuning) {
        events.push(GameEvent::PaddleHit(Side::Left));
    }
    if collision::deal_with_collision(&state.npc, &mut state.ball, &state.pitch, tuning) {
        events.push(GameEvent::PaddleHit(Side::Right));
    }

    events
}

fn apply_input(state: &mut GameState, input: &TickInput, now_ms: f64, tuning: &Tuning) {
    if let Some(y) = input.cursor_y {
        // Deliberately unclamped: only the NPC paddle is bounds-limited.
        // The next collision/bounds pass reads whatever the pointer set.
        state.player.y = y;
    }
    if input.freeze_npc {
        state.npc_frozen_until_ms = now_ms + tuning.freeze_duration_ms;
    }
    if input.snap_to_ball {
        state.player.y = state.ball.pos.y - state.player.height * 0.5;
        state.player.clamp_to(&state.pitch);
    }
    if input.grow_ball {
        state.ball.radius += tuning.radius_step;
    }
    if input.shrink_ball {
        state.ball.radius = (state.ball.radius - tuning.radius_step).max(tuning.min_ball_radius);
    }
}

/// Step the NPC paddle a fixed amount toward the ball
///
/// Constant step, no damping: it oscillates around the target when close.
/// An exact vertical tie steps downward. While frozen the paddle does not
/// move at all; ball motion and collisions are unaffected.
fn drive_npc(state: &mut GameState, now_ms: f64, tuning: &Tuning) {
    if state.is_npc_frozen(now_ms) {
        return;
    }

    let delta = state.ball.pos.y - state.npc.center_y();
    if delta < 0.0 {
        state.npc.y -= tuning.npc_speed;
    } else {
        state.npc.y += tuning.npc_speed;
    }
    state.npc.clamp_to(&state.pitch);
}
