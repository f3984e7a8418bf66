//! Text style data (no shaping, no rendering)

use crate::unit::Sp;

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: Sp,
    /// Line height as a multiple of the font size.
    pub line_height_multiplier: f32,
}

impl TextStyle {
    pub fn with_font_size(mut self, font_size: Sp) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn font_size_px(&self, density: f32, font_scale: f32) -> f32 {
        self.font_size.to_px(density, font_scale)
    }

    pub fn line_height_px(&self, density: f32, font_scale: f32) -> f32 {
        self.font_size_px(density, font_scale) * self.line_height_multiplier
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Sp(14.0),
            line_height_multiplier: 1.4,
        }
    }
}
