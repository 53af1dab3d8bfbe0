//! Pure simulation module
//!
//! All firework logic lives here. This module must stay pure:
//! - One `tick` call per animation frame (physics is defined per tick)
//! - Seeded RNG only, owned by the state
//! - No rendering or platform dependencies

pub mod firework;
pub mod particle;
pub mod state;
pub mod tick;

pub use firework::Firework;
pub use particle::{Particle, ParticleKind};
pub use state::SimState;
pub use tick::tick;
