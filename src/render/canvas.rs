//! Canvas 2D backend for the `Surface` trait (browser builds only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use super::color::Hsba;

/// `Surface` over a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
    stroke_color: Hsba,
    stroke_weight: f32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
            stroke_color: Hsba::default(),
            stroke_weight: 1.0,
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fade(&mut self, color: Hsba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }

    fn stroke(&mut self, color: Hsba) {
        self.stroke_color = color;
    }

    fn point(&mut self, pos: Vec2) {
        // p5-style point: a dot whose diameter is the stroke weight
        self.ctx.set_fill_style_str(&self.stroke_color.css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            pos.x as f64,
            pos.y as f64,
            (self.stroke_weight / 2.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            (diameter / 2.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_rect(&mut self, center: Vec2, size: f32, color: Hsba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(
            (center.x - size / 2.0) as f64,
            (center.y - size / 2.0) as f64,
            size as f64,
            size as f64,
        );
    }

    fn text(&mut self, text: &str, center: Vec2, size: f32, color: Hsba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(&format!("{size}px sans-serif"));
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(text, center.x as f64, center.y as f64);
    }
}
