//! Whole-pixel layout constraints

/// Constraints used during layout measurement.
///
/// A bound equal to [`Constraints::INFINITY`] is unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Constraints {
    pub const INFINITY: i32 = i32::MAX;

    /// Exact width, any height.
    pub fn fixed_width(width: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: 0,
            max_height: Self::INFINITY,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: i32, max_height: i32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// Unbounded on both axes.
    pub fn unbounded() -> Self {
        Self::loose(Self::INFINITY, Self::INFINITY)
    }

    /// Returns true if the width is bounded (max_width is not INFINITY).
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    #[inline]
    pub fn has_fixed_width(&self) -> bool {
        self.min_width == self.max_width
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: i32, height: i32) -> (i32, i32) {
        (
            width.clamp(self.min_width, self.max_width.max(self.min_width)),
            height.clamp(self.min_height, self.max_height.max(self.min_height)),
        )
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
