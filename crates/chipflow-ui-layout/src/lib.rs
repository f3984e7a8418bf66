//! Constrained flow layout for chipflow
//!
//! Items are packed greedily into rows no wider than the available width, every
//! row except the last is stretched to fill that width exactly, and the rows are
//! stacked top to bottom. [`pack`] works on already measured items;
//! [`FlowMeasurePolicy`] drives the whole measure/pack/re-measure cycle over
//! anything implementing [`Measurable`].

mod arrangement;
mod constraints;
mod core;
mod error;
mod flow;
mod result;

pub use arrangement::*;
pub use constraints::*;
pub use crate::core::*;
pub use error::*;
pub use flow::*;
pub use result::*;

pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::core::{Measurable, MeasuredItem, WidthPolicy};
    pub use crate::error::LayoutError;
    pub use crate::flow::{pack, FlowMeasurePolicy, FlowSpec};
    pub use crate::result::{LayoutResult, PlacedItem, Row};
}
