//! [`Surface`] backed by the browser's 2D canvas context.
//!
//! The only place that touches [`CanvasRenderingContext2d`]. Fallible canvas
//! calls propagate their `JsValue` error.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Fill, LinearGradient, Shadow, Surface};

/// A canvas element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    fn gradient(&self, g: &LinearGradient) -> Result<CanvasGradient, JsValue> {
        let gradient = self.ctx.create_linear_gradient(
            f64::from(g.start.x),
            f64::from(g.start.y),
            f64::from(g.end.x),
            f64::from(g.end.y),
        );
        for (offset, color) in &g.stops {
            gradient.add_color_stop(*offset, color)?;
        }
        Ok(gradient)
    }

    fn apply_fill(&self, fill: Fill<'_>) -> Result<(), JsValue> {
        match fill {
            Fill::Color(color) => self.ctx.set_fill_style_str(color),
            Fill::Gradient(g) => self.ctx.set_fill_style_canvas_gradient(&self.gradient(g)?),
        }
        Ok(())
    }

    fn center_text(&self) {
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(w), f64::from(h));
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) -> Result<(), JsValue> {
        self.ctx.translate(f64::from(offset.x), f64::from(offset.y))
    }

    fn rotate(&mut self, radians: f32) -> Result<(), JsValue> {
        self.ctx.rotate(f64::from(radians))
    }

    fn scale(&mut self, factor: Vec2) -> Result<(), JsValue> {
        self.ctx.scale(f64::from(factor.x), f64::from(factor.y))
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(f64::from(alpha));
    }

    fn set_shadow(&mut self, shadow: Option<Shadow<'_>>) {
        match shadow {
            Some(s) => {
                self.ctx.set_shadow_color(s.color);
                self.ctx.set_shadow_blur(f64::from(s.blur));
                self.ctx.set_shadow_offset_x(f64::from(s.offset.x));
                self.ctx.set_shadow_offset_y(f64::from(s.offset.y));
            }
            None => self.ctx.set_shadow_color("transparent"),
        }
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill<'_>) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(f64::from(center.x), f64::from(center.y), f64::from(radius), 0.0, TAU)?;
        self.apply_fill(fill)?;
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, at: Vec2, color: &str, line_width: f32) -> Result<(), JsValue> {
        self.center_text();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(f64::from(line_width));
        self.ctx.stroke_text(text, f64::from(at.x), f64::from(at.y))
    }

    fn fill_text(&mut self, text: &str, at: Vec2, fill: Fill<'_>) -> Result<(), JsValue> {
        self.center_text();
        self.apply_fill(fill)?;
        self.ctx.fill_text(text, f64::from(at.x), f64::from(at.y))
    }
}
