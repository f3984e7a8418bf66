//! Output of a flow pass: rows, placed items and the overall size

use chipflow_ui_graphics::{IntRect, IntSize};
use smallvec::SmallVec;

/// A maximal left-to-right run of items sharing one line of the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Item indices in placement order. Never empty.
    pub indices: SmallVec<[usize; 8]>,
    /// Sum of the items' pre-stretch widths, gaps excluded.
    pub content_width: i32,
    /// Tallest final item height in the row.
    pub height: i32,
    /// Top edge of the row.
    pub y: i32,
}

impl Row {
    pub fn count(&self) -> usize {
        self.indices.len()
    }
}

/// Final geometry of one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacedItem {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PlacedItem {
    pub fn rect(&self) -> IntRect {
        IntRect::new(self.x, self.y, self.width, self.height)
    }
}

/// Result of packing a flow.
///
/// `placed_items` is ordered row by row, left to right, so it lines up with
/// `rows` read in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutResult {
    pub rows: Vec<Row>,
    pub placed_items: Vec<PlacedItem>,
    pub total_width: i32,
    pub total_height: i32,
}

impl LayoutResult {
    pub(crate) fn empty(max_width: i32) -> Self {
        Self {
            rows: Vec::new(),
            placed_items: Vec::new(),
            total_width: max_width,
            total_height: 0,
        }
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.total_width, self.total_height)
    }

    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Placed items belonging to `row`, in left-to-right order.
    pub fn row_items(&self, row: usize) -> &[PlacedItem] {
        if row >= self.rows.len() {
            return &[];
        }
        let start: usize = self.rows[..row].iter().map(Row::count).sum();
        &self.placed_items[start..start + self.rows[row].count()]
    }

    /// Looks up the placement of the item with the given index.
    pub fn placed(&self, index: usize) -> Option<&PlacedItem> {
        self.placed_items.iter().find(|placed| placed.index == index)
    }

    /// Row number holding the item with the given index.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.indices.contains(&index))
    }

    /// Returns the index of the item under `(x, y)`.
    ///
    /// Gaps, the ragged tail of the last row, and the space below a shorter
    /// item in a taller row hit nothing.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        let row = self
            .rows
            .iter()
            .position(|row| y >= row.y && y < row.y.saturating_add(row.height))?;
        self.row_items(row)
            .iter()
            .find(|placed| placed.rect().contains(x, y))
            .map(|placed| placed.index)
    }
}
