//! Auto-sizing chip flow layouts
//!
//! [`ChipFlow`] turns a list of items and a label function into rows of chips
//! that fill the available width, and routes clicks into one of the selection
//! policies from `chipflow-selection`.

mod chip;
mod chip_flow;
mod colors;
mod text;

pub use chip::{ChipMeasurable, Density};
pub use chip_flow::{ChipFlow, ChipFlowSpec, ChipLayout, PlacedChip};
pub use colors::{ChipColors, ChipStyle};
pub use text::{measure_text, set_text_measurer, MonospacedTextMeasurer, TextMeasurer, TextMetrics};

pub use chipflow_selection::{
    MultiSelect, Selection, SelectionHandle, SelectionState, SingleSelect, Stateless,
};
pub use chipflow_ui_graphics::{Color, Dp, EdgeInsets, IntRect, IntSize, Sp, TextStyle};
pub use chipflow_ui_layout::{Constraints, LayoutError, LayoutResult, WidthPolicy};
