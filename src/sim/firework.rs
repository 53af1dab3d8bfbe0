//! A single firework: one launcher rocket plus its explosion fragments
//!
//! Two-phase lifecycle: the rocket climbs until gravity cancels its
//! upward velocity, then bursts into fragments that decay and fall.

use glam::Vec2;
use rand::Rng;

use super::particle::Particle;
use crate::consts::*;

/// Lifecycle phase. The launcher particle exists only while ascending,
/// so "fragments only after explosion" holds by construction.
#[derive(Debug, Clone)]
enum Phase {
    Ascending(Particle),
    Exploded,
}

/// One launch-to-burn-out firework
#[derive(Debug, Clone)]
pub struct Firework {
    hue: f32,
    phase: Phase,
    fragments: Vec<Particle>,
}

impl Firework {
    /// Launch a rocket from a random spot along the bottom edge
    pub fn launch(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let hue = rng.random_range(0.0..HUE_MAX);
        let x = rng.random_range(0.0..width);
        Self {
            hue,
            phase: Phase::Ascending(Particle::launcher(x, height, hue, rng)),
            fragments: Vec::new(),
        }
    }

    /// Advance one tick: drive the launcher to apex, burst there, then
    /// decay the fragments. Ticking a finished firework is a no-op.
    pub fn tick(&mut self, gravity: Vec2, rng: &mut impl Rng) {
        let mut burst_at = None;
        if let Phase::Ascending(launcher) = &mut self.phase {
            launcher.apply_force(gravity);
            launcher.tick();
            // Apex: the rocket has stopped rising
            if launcher.vel.y >= 0.0 {
                burst_at = Some(launcher.pos);
            }
        }
        if let Some(origin) = burst_at {
            self.explode(origin, rng);
            self.phase = Phase::Exploded;
        }

        for frag in &mut self.fragments {
            frag.apply_force(gravity);
            frag.tick();
        }
        self.fragments.retain(|f| !f.is_done());
    }

    fn explode(&mut self, origin: Vec2, rng: &mut impl Rng) {
        log::debug!("firework burst at ({:.0}, {:.0})", origin.x, origin.y);
        let hue = self.hue;
        self.fragments
            .extend((0..FRAGMENT_COUNT).map(|_| Particle::fragment(origin, hue, rng)));
    }

    /// Burned out: exploded and every fragment has faded
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Exploded) && self.fragments.is_empty()
    }

    /// The rocket particle, present only before the explosion
    pub fn launcher(&self) -> Option<&Particle> {
        match &self.phase {
            Phase::Ascending(launcher) => Some(launcher),
            Phase::Exploded => None,
        }
    }

    pub fn fragments(&self) -> &[Particle] {
        &self.fragments
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }
}
