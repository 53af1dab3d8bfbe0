//! Rendering abstraction
//!
//! The simulation stays pure; everything that touches a concrete canvas
//! goes through the `Surface` trait, so the drawing logic is testable
//! against a recording backend and the wasm build plugs in Canvas 2D.

pub mod color;
pub mod overlay;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use color::Hsba;
pub use overlay::{ScoreBand, draw_overlay};

use glam::Vec2;

use crate::consts::*;
use crate::score::ScoreSnapshot;
use crate::sim::{Firework, Particle, SimState};

/// Minimal drawing surface contract, HSB color model throughout
pub trait Surface {
    fn size(&self) -> Vec2;
    /// Wash the whole surface with a translucent fill; low alpha leaves
    /// the previous frame showing through as a motion trail
    fn fade(&mut self, color: Hsba);
    fn stroke_weight(&mut self, weight: f32);
    fn stroke(&mut self, color: Hsba);
    /// Dot at `pos`, sized by the current stroke weight
    fn point(&mut self, pos: Vec2);
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Hsba);
    /// Axis-aligned square centered at `center`
    fn fill_rect(&mut self, center: Vec2, size: f32, color: Hsba);
    fn text(&mut self, text: &str, center: Vec2, size: f32, color: Hsba);
}

/// Draw one complete frame: trail wash, fireworks, then the score overlay
pub fn draw_frame(surface: &mut dyn Surface, state: &SimState, snapshot: &ScoreSnapshot) {
    surface.fade(Hsba::new(0.0, 0.0, 0.0, TRAIL_ALPHA));
    for fw in &state.fireworks {
        draw_firework(surface, fw);
    }
    draw_overlay(surface, snapshot);
}

fn draw_firework(surface: &mut dyn Surface, fw: &Firework) {
    if let Some(launcher) = fw.launcher() {
        draw_particle(surface, launcher);
    }
    for frag in fw.fragments() {
        draw_particle(surface, frag);
    }
}

fn draw_particle(surface: &mut dyn Surface, particle: &Particle) {
    surface.stroke_weight(particle.stroke_weight());
    surface.stroke(Hsba::new(
        particle.hue,
        CHANNEL_MAX,
        CHANNEL_MAX,
        particle.alpha(),
    ));
    surface.point(particle.pos);
}

/// Records every drawing call instead of rasterizing; test backend
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub fades: Vec<Hsba>,
    pub points: Vec<(Vec2, f32, Hsba)>,
    pub circles: Vec<(Vec2, f32, Hsba)>,
    pub rects: Vec<(Vec2, f32, Hsba)>,
    pub texts: Vec<(String, Vec2, f32)>,
    weight: f32,
    color: Hsba,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
    fn fade(&mut self, color: Hsba) {
        self.fades.push(color);
    }
    fn stroke_weight(&mut self, weight: f32) {
        self.weight = weight;
    }
    fn stroke(&mut self, color: Hsba) {
        self.color = color;
    }
    fn point(&mut self, pos: Vec2) {
        self.points.push((pos, self.weight, self.color));
    }
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        self.circles.push((center, diameter, color));
    }
    fn fill_rect(&mut self, center: Vec2, size: f32, color: Hsba) {
        self.rects.push((center, size, color));
    }
    fn text(&mut self, text: &str, center: Vec2, size: f32, _color: Hsba) {
        self.texts.push((text.to_string(), center, size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim;

    fn high_score_state() -> (SimState, ScoreSnapshot) {
        let mut state = SimState::new(400.0, 300.0, 21);
        let snap = ScoreSnapshot {
            score: 95.0,
            max_score: 100.0,
        };
        // Run until something is airborne
        while state.fireworks.is_empty() {
            sim::tick(&mut state, snap.ratio());
        }
        (state, snap)
    }

    #[test]
    fn test_frame_fades_before_drawing() {
        let (state, snap) = high_score_state();
        let mut surface = RecordingSurface::new(400.0, 300.0);
        draw_frame(&mut surface, &state, &snap);
        assert_eq!(surface.fades.len(), 1);
        assert_eq!(surface.fades[0].a, TRAIL_ALPHA);
    }

    #[test]
    fn test_launcher_draws_as_fat_point() {
        let (state, snap) = high_score_state();
        let mut surface = RecordingSurface::new(400.0, 300.0);
        draw_frame(&mut surface, &state, &snap);
        let fw = &state.fireworks[0];
        let launcher = fw.launcher().expect("still ascending");
        let (pos, weight, color) = surface.points[0];
        assert_eq!(pos, launcher.pos);
        assert_eq!(weight, LAUNCHER_WEIGHT);
        assert_eq!(color.h, fw.hue());
        assert_eq!(color.a, CHANNEL_MAX);
    }

    #[test]
    fn test_fragments_draw_with_lifespan_alpha() {
        let mut state = SimState::new(400.0, 300.0, 22);
        let snap = ScoreSnapshot {
            score: 100.0,
            max_score: 100.0,
        };
        // Run until some firework has burst
        while !state.fireworks.iter().any(|fw| !fw.fragments().is_empty()) {
            sim::tick(&mut state, snap.ratio());
        }
        let mut surface = RecordingSurface::new(400.0, 300.0);
        draw_frame(&mut surface, &state, &snap);

        let fragment_points: Vec<_> = surface
            .points
            .iter()
            .filter(|(_, w, _)| *w == FRAGMENT_WEIGHT)
            .collect();
        assert!(!fragment_points.is_empty());
        for (_, _, color) in fragment_points {
            assert!(color.a <= LIFESPAN_FULL);
        }
    }
}
