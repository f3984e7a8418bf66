//! Selection state stores for chipflow chip groups
//!
//! Three interchangeable policies sit behind the [`Selection`] capability:
//! [`Stateless`] only forwards clicks, [`SingleSelect`] re-selects whatever was
//! clicked last, and [`MultiSelect`] toggles membership in an index set. Every
//! toggle replaces the state and then notifies its callback once. The only
//! skipped notification is a single-select or stateless click on an index
//! with no item behind it.
//!
//! Stores do not keep the item list. Each toggle is handed the caller's current
//! items so the callback can be given the resolved items.

mod handle;
mod selection;
mod state;

pub use handle::SelectionHandle;
pub use selection::*;
pub use state::SelectionState;
