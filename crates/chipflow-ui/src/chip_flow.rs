//! Chip flow widget: items + label function + selection policy over the flow packer.

use chipflow_selection::{MultiSelect, Selection, SelectionState, SingleSelect, Stateless};
use chipflow_ui_graphics::{Dp, EdgeInsets, IntRect, IntSize, TextStyle};
use chipflow_ui_layout::{
    Constraints, FlowMeasurePolicy, FlowSpec, LayoutError, LayoutResult,
};
use smallvec::SmallVec;
use std::collections::BTreeSet;

use crate::chip::{ChipMeasurable, Density};
use crate::colors::{ChipColors, ChipStyle};
use crate::text::{with_text_measurer, TextMeasurer};

/// Specification for chip flow appearance and spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct ChipFlowSpec {
    pub horizontal_gap: Dp,
    pub vertical_gap: Dp,
    pub text_style: TextStyle,
    pub content_padding: EdgeInsets,
    pub colors: ChipColors,
}

impl ChipFlowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_gap(mut self, gap: Dp) -> Self {
        self.horizontal_gap = gap;
        self
    }

    pub fn vertical_gap(mut self, gap: Dp) -> Self {
        self.vertical_gap = gap;
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn content_padding(mut self, padding: EdgeInsets) -> Self {
        self.content_padding = padding;
        self
    }

    pub fn colors(mut self, colors: ChipColors) -> Self {
        self.colors = colors;
        self
    }
}

impl Default for ChipFlowSpec {
    fn default() -> Self {
        Self {
            horizontal_gap: Dp(8.0),
            vertical_gap: Dp(8.0),
            text_style: TextStyle::default(),
            content_padding: EdgeInsets::symmetric(Dp(12.0), Dp(6.0)),
            colors: ChipColors::default(),
        }
    }
}

/// One chip ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedChip {
    pub index: usize,
    pub rect: IntRect,
    /// Label as it fits in `rect`, ellipsized when the chip is narrower than its text.
    pub text: String,
    pub selected: bool,
    pub style: ChipStyle,
}

/// Result of measuring a [`ChipFlow`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChipLayout {
    pub layout: LayoutResult,
    /// Chips in placement order, row by row.
    pub chips: Vec<PlacedChip>,
}

impl ChipLayout {
    pub fn size(&self) -> IntSize {
        self.layout.size()
    }

    pub fn chip(&self, index: usize) -> Option<&PlacedChip> {
        self.chips.iter().find(|chip| chip.index == index)
    }

    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.layout.hit_test(x, y)
    }
}

/// A flow of clickable chips over arbitrary items.
///
/// Layout only depends on the items, labels, [`ChipFlowSpec`] and the width policy of the
/// selection; selection state only changes each chip's `selected` flag and
/// style, except that single selection caps chip widths to the row.
pub struct ChipFlow<T, S> {
    items: Vec<T>,
    label: Box<dyn Fn(&T) -> String>,
    selection: S,
    spec: ChipFlowSpec,
}

impl<T, S> ChipFlow<T, S>
where
    S: Selection<T>,
{
    pub fn new(items: Vec<T>, label: impl Fn(&T) -> String + 'static, selection: S) -> Self {
        Self {
            items,
            label: Box::new(label),
            selection,
            spec: ChipFlowSpec::default(),
        }
    }

    pub fn with_spec(mut self, spec: ChipFlowSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn spec(&self) -> &ChipFlowSpec {
        &self.spec
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the item list. Selection indices are kept as they are.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn current(&self) -> SelectionState {
        self.selection.current()
    }

    pub fn label_of(&self, index: usize) -> Option<String> {
        self.items.get(index).map(|item| (self.label)(item))
    }

    /// Forwards a click on chip `index` to the selection policy.
    pub fn click(&mut self, index: usize) {
        self.selection.toggle(index, &self.items);
    }

    /// Clicks whichever chip of `layout` is under `(x, y)`, if any.
    pub fn click_at(&mut self, layout: &ChipLayout, x: i32, y: i32) -> Option<usize> {
        let index = layout.hit_test(x, y)?;
        self.click(index);
        Some(index)
    }

    /// Lays the chips out in a flow exactly `max_width` pixels wide, using the
    /// process-wide text measurer.
    pub fn measure(&self, max_width: i32, density: Density) -> Result<ChipLayout, LayoutError> {
        with_text_measurer(|measurer| self.measure_with(measurer, max_width, density))
    }

    pub fn measure_with(
        &self,
        measurer: &dyn TextMeasurer,
        max_width: i32,
        density: Density,
    ) -> Result<ChipLayout, LayoutError> {
        let labels: Vec<String> = self.items.iter().map(|item| (self.label)(item)).collect();
        let measurables: SmallVec<[ChipMeasurable<'_>; 16]> = labels
            .iter()
            .map(|label| {
                ChipMeasurable::new(
                    label,
                    &self.spec.text_style,
                    self.spec.content_padding,
                    density,
                    measurer,
                )
            })
            .collect();

        let flow = FlowSpec::new()
            .horizontal_gap(self.spec.horizontal_gap.round_to_px(density.density))
            .vertical_gap(self.spec.vertical_gap.round_to_px(density.density))
            .width_policy(self.selection.width_policy());
        let layout = FlowMeasurePolicy::new(flow)
            .measure(&measurables, Constraints::loose(max_width, Constraints::INFINITY))?;

        let chips = layout
            .placed_items
            .iter()
            .map(|placed| {
                let selected = self.selection.is_selected(placed.index);
                PlacedChip {
                    index: placed.index,
                    rect: placed.rect(),
                    text: measurables[placed.index].display_text(placed.width),
                    selected,
                    style: self.spec.colors.resolve(selected),
                }
            })
            .collect();

        log::debug!(
            "chip flow: {} chips in {} rows, {:?}",
            self.items.len(),
            layout.row_count(),
            layout.size()
        );
        Ok(ChipLayout { layout, chips })
    }
}

impl<T, F> ChipFlow<T, Stateless<F>>
where
    F: FnMut(usize, &T),
{
    /// Display-only chips; `on_click` receives the clicked index and item.
    pub fn stateless(items: Vec<T>, label: impl Fn(&T) -> String + 'static, on_click: F) -> Self {
        Self::new(items, label, Stateless::new(on_click))
    }
}

impl<T, F> ChipFlow<T, SingleSelect<F>>
where
    F: FnMut(usize, &T),
{
    pub fn single_select(
        items: Vec<T>,
        label: impl Fn(&T) -> String + 'static,
        default_selected: Option<usize>,
        on_selected: F,
    ) -> Self {
        Self::new(items, label, SingleSelect::new(default_selected, on_selected))
    }
}

impl<T, F> ChipFlow<T, MultiSelect<F>>
where
    F: FnMut(&BTreeSet<usize>, Vec<&T>),
{
    pub fn multi_select(
        items: Vec<T>,
        label: impl Fn(&T) -> String + 'static,
        default_selected: impl IntoIterator<Item = usize>,
        on_change: F,
    ) -> Self {
        Self::new(items, label, MultiSelect::new(default_selected, on_change))
    }
}

impl<T, S> ChipFlow<T, S>
where
    T: ToString,
    S: Selection<T>,
{
    /// Uses each item's `ToString` output as its label.
    pub fn with_display_label(items: Vec<T>, selection: S) -> Self {
        Self::new(items, |item: &T| item.to_string(), selection)
    }
}
