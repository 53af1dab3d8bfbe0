//! Score-dependent overlay: headline, score line, reaction shape
//!
//! The overlay is what the viewer reads; the fireworks are gated on the
//! same band thresholds but live in `sim`.

use glam::Vec2;

use super::color::Hsba;
use super::Surface;
use crate::consts::*;
use crate::score::ScoreSnapshot;

/// Headline text size (px)
const HEADLINE_SIZE: f32 = 80.0;
/// Score line text size (px)
const SCORE_LINE_SIZE: f32 = 50.0;
/// Vertical offset of headline / score line from the canvas midpoint
const TEXT_OFFSET: f32 = 50.0;
/// Reaction shape: offset below the midpoint and its extent
const SHAPE_OFFSET: f32 = 150.0;
const SHAPE_SIZE: f32 = 150.0;
const SHAPE_ALPHA: f32 = 100.0;

/// Which reaction band the current score ratio falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// ratio >= 0.90: celebration message, circle, fireworks
    Celebrate,
    /// 0.60 <= ratio < 0.90: encouraging message, square
    Solid,
    /// 0 < ratio < 0.60: warning message, no shape
    Struggling,
    /// No score yet
    Waiting,
}

impl ScoreBand {
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio >= CELEBRATE_RATIO {
            ScoreBand::Celebrate
        } else if ratio >= SOLID_RATIO {
            ScoreBand::Solid
        } else if ratio > 0.0 {
            ScoreBand::Struggling
        } else {
            ScoreBand::Waiting
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Celebrate => "Outstanding! Top marks!",
            ScoreBand::Solid => "Good result, keep it up.",
            ScoreBand::Struggling => "More practice needed!",
            ScoreBand::Waiting => "Waiting for score...",
        }
    }

    /// Headline color per band: green, yellow, red, gray
    pub fn text_color(&self) -> Hsba {
        match self {
            ScoreBand::Celebrate => Hsba::new(120.0, 255.0, 255.0, CHANNEL_MAX),
            ScoreBand::Solid => Hsba::new(60.0, 255.0, 255.0, CHANNEL_MAX),
            ScoreBand::Struggling => Hsba::new(0.0, 255.0, 255.0, CHANNEL_MAX),
            ScoreBand::Waiting => Hsba::new(0.0, 0.0, 150.0, CHANNEL_MAX),
        }
    }

    /// Fireworks launch only while celebrating
    pub fn fireworks_enabled(&self) -> bool {
        matches!(self, ScoreBand::Celebrate)
    }
}

/// Draw the per-frame text and shape reactions for the current score
pub fn draw_overlay(surface: &mut dyn Surface, snapshot: &ScoreSnapshot) {
    let center = surface.size() * 0.5;
    let band = ScoreBand::from_ratio(snapshot.ratio());

    surface.text(
        band.message(),
        center - Vec2::new(0.0, TEXT_OFFSET),
        HEADLINE_SIZE,
        band.text_color(),
    );

    surface.text(
        &format!("Score: {}/{}", snapshot.score, snapshot.max_score),
        center + Vec2::new(0.0, TEXT_OFFSET),
        SCORE_LINE_SIZE,
        Hsba::new(0.0, 0.0, 200.0, CHANNEL_MAX),
    );

    let shape_center = center + Vec2::new(0.0, SHAPE_OFFSET);
    match band {
        ScoreBand::Celebrate => {
            surface.fill_circle(
                shape_center,
                SHAPE_SIZE,
                Hsba::new(120.0, 255.0, 255.0, SHAPE_ALPHA),
            );
        }
        ScoreBand::Solid => {
            surface.fill_rect(
                shape_center,
                SHAPE_SIZE,
                Hsba::new(60.0, 255.0, 255.0, SHAPE_ALPHA),
            );
        }
        ScoreBand::Struggling | ScoreBand::Waiting => {}
    }
}
