//! Greedy row packing with full-width redistribution.
//!
//! The pass runs in three steps:
//!
//! 1. **Row assignment.** Items are taken in order and appended to the current
//!    row while `row width + gap + item width` stays within the max width. An
//!    item that does not fit closes the row and starts the next one. An item
//!    wider than the max width is never split and never leaves an empty row
//!    behind; it simply sits alone.
//! 2. **Redistribution.** Every row but the last receives the leftover width
//!    `max_width - content - gaps`, split evenly; the first `extra % count`
//!    items take one extra pixel each. The last row keeps intrinsic widths.
//!    Each item is then re-measured at its final width, since truncation can
//!    make height depend on width.
//! 3. **Placement.** Rows are stacked with the vertical gap, items within a row
//!    are laid out with the horizontal gap.
//!
//! The pass is pure: the same inputs always produce the same [`LayoutResult`].

use crate::arrangement::{Arrangement, SpacedBy};
use crate::constraints::Constraints;
use crate::core::{Measurable, MeasuredItem, WidthPolicy};
use crate::error::LayoutError;
use crate::result::{LayoutResult, PlacedItem, Row};
use smallvec::SmallVec;
use std::ops::Range;

/// Specification for flow layout behavior, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowSpec {
    pub horizontal_gap: i32,
    pub vertical_gap: i32,
    pub width_policy: WidthPolicy,
}

impl FlowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_gap(mut self, gap: i32) -> Self {
        self.horizontal_gap = gap;
        self
    }

    pub fn vertical_gap(mut self, gap: i32) -> Self {
        self.vertical_gap = gap;
        self
    }

    pub fn width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }
}

/// Packs measured items into rows no wider than `max_width`.
///
/// Item heights are taken as-is; use [`pack_with`] when height depends on the
/// final width.
pub fn pack(
    items: &[MeasuredItem],
    max_width: i32,
    h_gap: i32,
    v_gap: i32,
) -> Result<LayoutResult, LayoutError> {
    pack_with(items, max_width, h_gap, v_gap, |item, _| item.intrinsic_height)
}

/// Packs measured items, asking `remeasure` for each item's height at its final width.
pub fn pack_with<F>(
    items: &[MeasuredItem],
    max_width: i32,
    h_gap: i32,
    v_gap: i32,
    mut remeasure: F,
) -> Result<LayoutResult, LayoutError>
where
    F: FnMut(&MeasuredItem, i32) -> i32,
{
    LayoutError::check_max_width(max_width)?;
    if items.is_empty() {
        return Ok(LayoutResult::empty(max_width));
    }

    let h_gap = h_gap.max(0);
    let v_gap = v_gap.max(0);
    let row_ranges = assign_rows(items, max_width, h_gap);
    let last_row = row_ranges.len() - 1;

    let mut rows = Vec::with_capacity(row_ranges.len());
    let mut placed_items = Vec::with_capacity(items.len());
    let mut row_heights: SmallVec<[i32; 16]> = SmallVec::with_capacity(row_ranges.len());

    for (row_index, range) in row_ranges.into_iter().enumerate() {
        let row_items = &items[range];
        let count = row_items.len() as i32;
        let content_width = row_items
            .iter()
            .fold(0i32, |sum, item| sum.saturating_add(item.intrinsic_width));
        let total_gap = h_gap.saturating_mul(count - 1);
        let extra = if row_index == last_row {
            0
        } else {
            max_width
                .saturating_sub(content_width)
                .saturating_sub(total_gap)
                .max(0)
        };
        let extra_per_item = extra / count;
        let remainder = extra % count;

        let mut widths: SmallVec<[i32; 8]> = SmallVec::with_capacity(row_items.len());
        let mut heights: SmallVec<[i32; 8]> = SmallVec::with_capacity(row_items.len());
        for (position, item) in row_items.iter().enumerate() {
            let bonus = if (position as i32) < remainder { 1 } else { 0 };
            let width = item.intrinsic_width.saturating_add(extra_per_item + bonus);
            heights.push(remeasure(item, width));
            widths.push(width);
        }

        let mut xs: SmallVec<[i32; 8]> = SmallVec::from_elem(0, widths.len());
        SpacedBy(h_gap).arrange(&widths, &mut xs);
        let height = heights.iter().copied().max().unwrap_or(0);

        for (((item, x), width), item_height) in
            row_items.iter().zip(xs).zip(widths).zip(heights)
        {
            placed_items.push(PlacedItem {
                index: item.index,
                x,
                y: 0,
                width,
                height: item_height,
            });
        }
        row_heights.push(height);
        rows.push(Row {
            indices: row_items.iter().map(|item| item.index).collect(),
            content_width,
            height,
            y: 0,
        });
    }

    let mut ys: SmallVec<[i32; 16]> = SmallVec::from_elem(0, row_heights.len());
    let total_height = SpacedBy(v_gap).arrange(&row_heights, &mut ys);

    let mut placed = placed_items.iter_mut();
    for (row, y) in rows.iter_mut().zip(ys) {
        row.y = y;
        for item in placed.by_ref().take(row.count()) {
            item.y = y;
        }
    }

    log::trace!(
        "flow packed {} items into {} rows ({}x{})",
        items.len(),
        rows.len(),
        max_width,
        total_height
    );

    Ok(LayoutResult {
        rows,
        placed_items,
        total_width: max_width,
        total_height,
    })
}

/// Greedy, order-preserving row assignment. Every range is non-empty.
fn assign_rows(items: &[MeasuredItem], max_width: i32, h_gap: i32) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut row_start = 0usize;
    let mut row_width = 0i32;

    for (position, item) in items.iter().enumerate() {
        let row_is_empty = position == row_start;
        let needed = if row_is_empty {
            item.intrinsic_width
        } else {
            row_width
                .saturating_add(h_gap)
                .saturating_add(item.intrinsic_width)
        };
        if needed > max_width && !row_is_empty {
            rows.push(row_start..position);
            row_start = position;
            row_width = 0;
        }
        if position != row_start {
            row_width = row_width.saturating_add(h_gap);
        }
        row_width = row_width.saturating_add(item.intrinsic_width);
        if position == row_start && item.intrinsic_width > max_width {
            log::debug!(
                "flow item {} is wider than the row ({} > {}), placing it alone",
                item.index,
                item.intrinsic_width,
                max_width
            );
        }
    }
    rows.push(row_start..items.len());
    rows
}

/// Measure policy that runs a full flow pass over [`Measurable`] items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowMeasurePolicy {
    pub spec: FlowSpec,
}

impl FlowMeasurePolicy {
    pub fn new(spec: FlowSpec) -> Self {
        Self { spec }
    }

    /// Measures every item's intrinsic size, applies the width policy, packs,
    /// then re-measures each item at its final width.
    ///
    /// Only `constraints.max_width` is consulted; the flow is always exactly
    /// that wide and as tall as its rows need.
    pub fn measure<M: Measurable>(
        &self,
        measurables: &[M],
        constraints: Constraints,
    ) -> Result<LayoutResult, LayoutError> {
        let max_width = constraints.max_width;
        LayoutError::check_max_width(max_width)?;

        let items: Vec<MeasuredItem> = measurables
            .iter()
            .enumerate()
            .map(|(index, measurable)| {
                let width = measurable.max_intrinsic_width(Constraints::INFINITY);
                let height = measurable.min_intrinsic_height(width);
                MeasuredItem::new(index, self.spec.width_policy.adjust(width, max_width), height)
            })
            .collect();

        pack_with(
            &items,
            max_width,
            self.spec.horizontal_gap,
            self.spec.vertical_gap,
            |item, width| {
                measurables[item.index]
                    .measure(Constraints::fixed_width(width))
                    .height
            },
        )
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
