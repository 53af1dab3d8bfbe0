//! Simulation state: the set of in-flight fireworks
//!
//! All stochastic decisions draw from the seeded RNG owned here, so a
//! given seed plus a given score-ratio schedule replays exactly.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::firework::Firework;

/// Everything the frame tick advances
#[derive(Debug)]
pub struct SimState {
    /// Canvas extent, used to position launches
    pub width: f32,
    pub height: f32,
    /// In-flight fireworks; holds no finished one after a tick completes
    pub fireworks: Vec<Firework>,
    /// Total fireworks ever launched
    pub launched: u64,
    /// Frames advanced since creation
    pub time_ticks: u64,
    pub(super) rng: Pcg32,
}

impl SimState {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            fireworks: Vec::new(),
            launched: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Update the launch area after a canvas resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
