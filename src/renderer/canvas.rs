//! Draw surface abstraction
//!
//! A small subset of the Canvas 2D API. The scene painter only talks to this
//! trait, so it can draw into a browser canvas or into a recording list.

use glam::Vec2;

use crate::sim::Aabb;

/// sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::hex(0xffffff);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    /// HSL with hue in degrees, saturation and lightness in [0, 1]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgba(to_u8(r), to_u8(g), to_u8(b), 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string (`#rrggbb` when opaque)
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Gradient color stop (offset in [0, 1])
pub type ColorStop = (f32, Rgba);

/// Fill style
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: &'static [ColorStop],
    },
    Radial {
        center: Vec2,
        radius: f32,
        stops: &'static [ColorStop],
    },
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// Something the scene can be painted onto
pub trait Canvas {
    fn fill_rect(&mut self, rect: Aabb, paint: &Paint);
    fn stroke_rect(&mut self, rect: Aabb, color: Rgba, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    /// Bold text with its baseline at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, align: TextAlign, paint: &Paint);
    /// Global alpha for subsequent draws
    fn set_alpha(&mut self, alpha: f32);
    /// Shadow glow for subsequent draws (`blur == 0` turns it off)
    fn set_glow(&mut self, color: Rgba, blur: f32);
    /// Dash pattern for strokes (empty = solid)
    fn set_line_dash(&mut self, dash: &[f32]);
    /// Disable smoothing for pixel art
    fn set_pixelated(&mut self, pixelated: bool);
}

/// Shorthand for a rectangle from its corner and size
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
    Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
}
