//! Units, integer geometry and styling data for chipflow
//!
//! Nothing in here measures or draws; these are the value types shared by the
//! layout engine and the chip adapter.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, IntOffset, IntRect, IntSize};
    pub use crate::typography::TextStyle;
    pub use crate::unit::{Dp, Sp};
}
