//! Canvas 2D backend (browser only)

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::canvas::{Canvas, ColorStop, Paint, Rgba, TextAlign};
use crate::sim::Aabb;

/// Forwards draw calls to a `CanvasRenderingContext2d`
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, gradient: CanvasGradient, stops: &[ColorStop]) -> CanvasGradient {
        for (offset, color) in stops {
            if let Err(e) = gradient.add_color_stop(*offset, &color.to_css()) {
                log::warn!("Bad gradient stop: {:?}", e);
            }
        }
        gradient
    }

    fn apply_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                self.ctx.set_fill_style_canvas_gradient(&self.gradient(g, stops));
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let (cx, cy) = (center.x as f64, center.y as f64);
                match self
                    .ctx
                    .create_radial_gradient(cx, cy, 0.0, cx, cy, *radius as f64)
                {
                    Ok(g) => self
                        .ctx
                        .set_fill_style_canvas_gradient(&self.gradient(g, stops)),
                    Err(e) => log::warn!("Radial gradient failed: {:?}", e),
                }
            }
        }
    }
}

impl Canvas for Canvas2d {
    fn fill_rect(&mut self, rect: Aabb, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Aabb, color: Rgba, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, align: TextAlign, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.set_font(&format!("bold {}px Arial", font_px));
        self.ctx.set_text_align(align.as_str());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_glow(&mut self, color: Rgba, blur: f32) {
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.set_shadow_blur(blur as f64);
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        let segments = js_sys::Array::new();
        for d in dash {
            segments.push(&JsValue::from_f64(*d as f64));
        }
        let _ = self.ctx.set_line_dash(&segments);
    }

    fn set_pixelated(&mut self, pixelated: bool) {
        self.ctx.set_image_smoothing_enabled(!pixelated);
    }
}
