//! Measurement contracts between the flow packer and its items

use crate::constraints::Constraints;
use chipflow_ui_graphics::IntSize;

/// Object capable of measuring one flow item and exposing intrinsic sizes.
pub trait Measurable {
    /// Returns the widest the item wants to be for the given height.
    fn max_intrinsic_width(&self, height: i32) -> i32;

    /// Returns the smallest height the item needs at the given width.
    fn min_intrinsic_height(&self, width: i32) -> i32;

    /// Measures the item under the provided constraints.
    fn measure(&self, constraints: Constraints) -> IntSize;
}

impl<M: Measurable + ?Sized> Measurable for &M {
    fn max_intrinsic_width(&self, height: i32) -> i32 {
        (**self).max_intrinsic_width(height)
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        (**self).min_intrinsic_height(width)
    }

    fn measure(&self, constraints: Constraints) -> IntSize {
        (**self).measure(constraints)
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn max_intrinsic_width(&self, height: i32) -> i32 {
        (**self).max_intrinsic_width(height)
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        (**self).min_intrinsic_height(width)
    }

    fn measure(&self, constraints: Constraints) -> IntSize {
        (**self).measure(constraints)
    }
}

/// Intrinsic size of one item, captured before packing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeasuredItem {
    pub index: usize,
    pub intrinsic_width: i32,
    pub intrinsic_height: i32,
}

impl MeasuredItem {
    pub const fn new(index: usize, intrinsic_width: i32, intrinsic_height: i32) -> Self {
        Self {
            index,
            intrinsic_width,
            intrinsic_height,
        }
    }

    /// Builds items from `(width, height)` pairs, indexed by position.
    pub fn from_sizes(sizes: impl IntoIterator<Item = (i32, i32)>) -> Vec<MeasuredItem> {
        sizes
            .into_iter()
            .enumerate()
            .map(|(index, (width, height))| MeasuredItem::new(index, width, height))
            .collect()
    }
}

/// Adjustment applied to each intrinsic width before rows are assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Keep the intrinsic width; an oversized item sits alone in a row wider than the flow.
    #[default]
    Intrinsic,
    /// Clamp to the row width so an oversized item truncates instead of overflowing.
    CapToMaxWidth,
}

impl WidthPolicy {
    pub fn adjust(self, intrinsic_width: i32, max_width: i32) -> i32 {
        match self {
            WidthPolicy::Intrinsic => intrinsic_width,
            WidthPolicy::CapToMaxWidth => intrinsic_width.min(max_width),
        }
    }
}
