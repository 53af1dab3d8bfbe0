//! Point particles: launcher rockets and explosion fragments
//!
//! A particle owns its own kinematic state and visual decay. Nothing
//! outside the owning firework ever mutates one.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Role of a particle within a firework, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleKind {
    /// Ascending rocket; removed by the owning firework at apex, never by decay
    Launcher,
    /// Explosion fragment; fades as its lifespan drains
    Fragment {
        /// Remaining life, also the stroke alpha. Starts at 255, loses a
        /// fixed amount per tick, never increases.
        lifespan: f32,
    },
}

/// A single simulated point
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-tick force accumulator, zeroed after every integration
    acc: Vec2,
    /// Color angle in [0, 360), shared by a launcher and its fragments
    pub hue: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Rocket particle at (x, y) with a randomized upward launch speed
    pub fn launcher(x: f32, y: f32, hue: f32, rng: &mut impl Rng) -> Self {
        let speed = rng.random_range(LAUNCH_SPEED_MIN..LAUNCH_SPEED_MAX);
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.0, -speed),
            acc: Vec2::ZERO,
            hue,
            kind: ParticleKind::Launcher,
        }
    }

    /// Burst fragment at `pos`, flung in a uniformly random direction
    pub fn fragment(pos: Vec2, hue: f32, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(BURST_SPEED_MIN..BURST_SPEED_MAX);
        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            acc: Vec2::ZERO,
            hue,
            kind: ParticleKind::Fragment {
                lifespan: LIFESPAN_FULL,
            },
        }
    }

    /// Accumulate a force for the next integration
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// Advance one tick.
    ///
    /// Drag and decay run before integration so a fragment's terminal
    /// frame still receives the current tick's gravity.
    pub fn tick(&mut self) {
        if let ParticleKind::Fragment { lifespan } = &mut self.kind {
            self.vel *= FRAGMENT_DRAG;
            *lifespan -= LIFESPAN_DECAY;
        }
        self.vel += self.acc;
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    /// Whether this particle is spent. Launchers never report done here;
    /// the owning firework retires them at apex.
    pub fn is_done(&self) -> bool {
        match self.kind {
            ParticleKind::Launcher => false,
            ParticleKind::Fragment { lifespan } => lifespan < 0.0,
        }
    }

    pub fn is_launcher(&self) -> bool {
        matches!(self.kind, ParticleKind::Launcher)
    }

    /// Stroke alpha in [0, 255]; launchers draw fully opaque
    pub fn alpha(&self) -> f32 {
        match self.kind {
            ParticleKind::Launcher => CHANNEL_MAX,
            ParticleKind::Fragment { lifespan } => lifespan,
        }
    }

    /// Launchers draw as fatter points than fragments
    pub fn stroke_weight(&self) -> f32 {
        if self.is_launcher() {
            LAUNCHER_WEIGHT
        } else {
            FRAGMENT_WEIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_launcher_initial_velocity() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = Particle::launcher(10.0, 200.0, 30.0, &mut rng);
            assert_eq!(p.vel.x, 0.0);
            assert!(p.vel.y <= -LAUNCH_SPEED_MIN && p.vel.y > -LAUNCH_SPEED_MAX);
        }
    }

    #[test]
    fn test_fragment_burst_speed_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = Particle::fragment(Vec2::new(50.0, 50.0), 120.0, &mut rng);
            let speed = p.vel.length();
            assert!(speed >= BURST_SPEED_MIN - 1e-3 && speed < BURST_SPEED_MAX + 1e-3);
        }
    }

    #[test]
    fn test_fragment_decays_out_within_65_ticks() {
        let mut rng = rng();
        let mut p = Particle::fragment(Vec2::ZERO, 0.0, &mut rng);
        for _ in 0..63 {
            p.tick();
        }
        assert!(!p.is_done(), "fragment died early");
        for _ in 0..2 {
            p.tick();
        }
        assert!(p.is_done(), "fragment still alive after 65 ticks");
    }

    #[test]
    fn test_launcher_never_done() {
        let mut rng = rng();
        let mut p = Particle::launcher(0.0, 100.0, 0.0, &mut rng);
        for _ in 0..1000 {
            p.apply_force(GRAVITY);
            p.tick();
            assert!(!p.is_done());
        }
        assert_eq!(p.alpha(), CHANNEL_MAX);
    }

    #[test]
    fn test_drag_applies_before_force_integration() {
        let mut rng = rng();
        let mut p = Particle::fragment(Vec2::ZERO, 0.0, &mut rng);
        let v0 = p.vel;
        p.apply_force(GRAVITY);
        p.tick();
        // Damped first, then the tick's gravity lands on top
        let expected = v0 * FRAGMENT_DRAG + GRAVITY;
        assert!((p.vel - expected).length() < 1e-5);
        assert!((p.pos - expected).length() < 1e-5);
    }

    #[test]
    fn test_acceleration_resets_each_tick() {
        let mut rng = rng();
        let mut p = Particle::launcher(0.0, 0.0, 0.0, &mut rng);
        p.apply_force(Vec2::new(3.0, 0.0));
        p.tick();
        let vx = p.vel.x;
        // No force this tick: horizontal velocity must not grow again
        p.tick();
        assert_eq!(p.vel.x, vx);
    }

    #[test]
    fn test_fragment_alpha_tracks_lifespan() {
        let mut rng = rng();
        let mut p = Particle::fragment(Vec2::ZERO, 0.0, &mut rng);
        assert_eq!(p.alpha(), LIFESPAN_FULL);
        p.tick();
        assert_eq!(p.alpha(), LIFESPAN_FULL - LIFESPAN_DECAY);
    }
}
