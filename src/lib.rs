//! Score Burst - a score-reactive firework celebration canvas
//!
//! Core modules:
//! - `sim`: Pure simulation (particles, fireworks, frame tick)
//! - `render`: Drawing surface abstraction, score overlay, canvas backend
//! - `score`: Score event ingestion and the per-frame snapshot cell

pub mod render;
pub mod score;
pub mod sim;

pub use score::{ScoreCell, ScoreSnapshot};

/// Simulation tuning constants
pub mod consts {
    use glam::Vec2;

    /// Downward gravity applied to every particle each tick (px/tick²)
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 0.2);

    /// Launcher initial upward speed range (px/tick, applied as -y)
    pub const LAUNCH_SPEED_MIN: f32 = 8.0;
    pub const LAUNCH_SPEED_MAX: f32 = 10.0;

    /// Fragment burst speed range (px/tick, isotropic)
    pub const BURST_SPEED_MIN: f32 = 2.0;
    pub const BURST_SPEED_MAX: f32 = 8.0;

    /// Fragments generated per explosion
    pub const FRAGMENT_COUNT: usize = 100;
    /// Per-tick velocity damping for fragments
    pub const FRAGMENT_DRAG: f32 = 0.9;

    /// Fragment lifespan at birth; doubles as stroke alpha
    pub const LIFESPAN_FULL: f32 = 255.0;
    /// Lifespan lost per tick
    pub const LIFESPAN_DECAY: f32 = 4.0;

    /// Per-frame launch probability while the celebration band holds
    pub const SPAWN_CHANCE: f32 = 0.1;

    /// Score-ratio band thresholds
    pub const CELEBRATE_RATIO: f32 = 0.9;
    pub const SOLID_RATIO: f32 = 0.6;

    /// Background wash alpha; low values leave motion trails
    pub const TRAIL_ALPHA: f32 = 25.0;

    /// Stroke weights for the two particle roles
    pub const LAUNCHER_WEIGHT: f32 = 4.0;
    pub const FRAGMENT_WEIGHT: f32 = 2.0;

    /// HSB color model ranges (hue in degrees, the rest byte-scaled)
    pub const HUE_MAX: f32 = 360.0;
    pub const CHANNEL_MAX: f32 = 255.0;
}
