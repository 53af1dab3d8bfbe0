//! Per-frame simulation advance
//!
//! Called once per animation frame. Spawn decision, then advance every
//! firework, then cull the finished ones. Collection mutation happens
//! only here, never mid-iteration from outside.

use rand::Rng;

use super::firework::Firework;
use super::state::SimState;
use crate::consts::*;

/// Advance the simulation by one frame.
///
/// While `score_ratio` sits in the celebration band, each frame rolls an
/// independent launch chance, which yields geometric arrival times
/// rather than a fixed burst.
pub fn tick(state: &mut SimState, score_ratio: f32) {
    state.time_ticks += 1;

    if score_ratio >= CELEBRATE_RATIO && state.rng.random::<f32>() < SPAWN_CHANCE {
        let fw = Firework::launch(state.width, state.height, &mut state.rng);
        state.fireworks.push(fw);
        state.launched += 1;
        log::debug!("firework launched (total {})", state.launched);
    }

    for fw in &mut state.fireworks {
        fw.tick(GRAVITY, &mut state.rng);
    }
    state.fireworks.retain(|fw| !fw.is_done());
}
