use chipflow_ui_graphics::{EdgeInsets, IntSize, TextStyle};
use chipflow_ui_layout::{Constraints, Measurable};

use crate::text::TextMeasurer;

/// Screen density used to resolve `Dp` and `Sp` values to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub density: f32,
    pub font_scale: f32,
}

impl Density {
    pub fn new(density: f32) -> Self {
        Self {
            density,
            font_scale: 1.0,
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// A single-line text chip: label plus content padding.
///
/// Chips never wrap; a chip narrower than its label shows the label
/// ellipsized, so its height is the same at every width.
pub struct ChipMeasurable<'a> {
    label: &'a str,
    style: &'a TextStyle,
    padding: EdgeInsets,
    density: Density,
    measurer: &'a dyn TextMeasurer,
}

impl<'a> ChipMeasurable<'a> {
    pub fn new(
        label: &'a str,
        style: &'a TextStyle,
        padding: EdgeInsets,
        density: Density,
        measurer: &'a dyn TextMeasurer,
    ) -> Self {
        Self {
            label,
            style,
            padding,
            density,
            measurer,
        }
    }

    fn horizontal_padding(&self) -> i32 {
        self.padding.horizontal_px(self.density.density)
    }

    fn vertical_padding(&self) -> i32 {
        self.padding.vertical_px(self.density.density)
    }

    /// The label as it fits inside a chip of the given outer width.
    pub fn display_text(&self, width: i32) -> String {
        let content_width = (width - self.horizontal_padding()).max(0) as f32;
        self.measurer
            .ellipsize(self.label, self.style, self.density, content_width)
            .into_owned()
    }
}

impl Measurable for ChipMeasurable<'_> {
    fn max_intrinsic_width(&self, _height: i32) -> i32 {
        let text = self.measurer.measure(self.label, self.style, self.density);
        text.width.ceil() as i32 + self.horizontal_padding()
    }

    fn min_intrinsic_height(&self, _width: i32) -> i32 {
        let text = self.measurer.measure(self.label, self.style, self.density);
        text.height.ceil() as i32 + self.vertical_padding()
    }

    fn measure(&self, constraints: Constraints) -> IntSize {
        let width = if constraints.has_fixed_width() {
            constraints.max_width
        } else {
            self.max_intrinsic_width(Constraints::INFINITY)
        };
        let height = self.min_intrinsic_height(width);
        let (width, height) = constraints.constrain(width, height);
        IntSize::new(width, height)
    }
}
