//! Blitz Pong entry point
//!
//! The rendering/input collaborator is host-specific and lives outside
//! this crate; the native binary runs a headless match on a stepped clock
//! and reports how it went.

use blitz_pong::Tuning;
use blitz_pong::runner::{NullRenderer, Runner, SteppedClock};

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Blitz Pong starting with seed {seed}");

    // 60 Hz frames on a stepped clock: a full 90 second match, instantly
    let tuning = Tuning::default();
    let mut runner = Runner::new(seed, tuning, SteppedClock::new(1000.0 / 60.0), NullRenderer);

    while !runner.is_over() {
        runner.frame();
    }

    let scores = &runner.state.scores;
    println!(
        "final score  player {}  npc {}  ({} ticks)",
        scores.left, scores.right, runner.state.time_ticks
    );
}
