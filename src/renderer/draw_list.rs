//! Recording canvas for headless runs and tests

use glam::Vec2;

use super::canvas::{Canvas, Paint, Rgba, TextAlign};
use crate::sim::Aabb;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Aabb, paint: Paint },
    StrokeRect {
        rect: Aabb,
        color: Rgba,
        line_width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    FillText {
        text: String,
        pos: Vec2,
        font_px: f32,
        align: TextAlign,
        paint: Paint,
    },
    SetAlpha(f32),
    SetGlow { color: Rgba, blur: f32 },
    SetLineDash(Vec<f32>),
    SetPixelated(bool),
}

/// Canvas that records every call in order
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Filled rectangles with a solid color
    pub fn solid_rects(&self, color: Rgba) -> Vec<Aabb> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect {
                    rect,
                    paint: Paint::Solid(col),
                } if *col == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Aabb, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Aabb, color: Rgba, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, align: TextAlign, paint: &Paint) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            font_px,
            align,
            paint: paint.clone(),
        });
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetAlpha(alpha));
    }

    fn set_glow(&mut self, color: Rgba, blur: f32) {
        self.commands.push(DrawCommand::SetGlow { color, blur });
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        self.commands.push(DrawCommand::SetLineDash(dash.to_vec()));
    }

    fn set_pixelated(&mut self, pixelated: bool) {
        self.commands.push(DrawCommand::SetPixelated(pixelated));
    }
}
