use crate::state::SelectionState;
use chipflow_ui_layout::WidthPolicy;
use std::collections::BTreeSet;

/// Capability shared by the selection policies.
///
/// A click is two steps: [`select`](Selection::select) replaces the state,
/// then [`notify`](Selection::notify) hands the new state to the policy's
/// callback. `toggle` runs both and never fails. Indices are not range-checked;
/// an index without a matching item still updates the state but has no item to
/// report.
pub trait Selection<T> {
    /// Applies a click on `index` to the state without running the callback.
    fn select(&mut self, index: usize);

    /// Reports the state after a click on `index` to the callback.
    fn notify(&mut self, index: usize, items: &[T]);

    fn toggle(&mut self, index: usize, items: &[T]) {
        self.select(index);
        self.notify(index, items);
    }

    fn current(&self) -> SelectionState;

    fn is_selected(&self, index: usize) -> bool {
        self.current().contains(index)
    }

    /// Width adjustment the packer must apply for this policy.
    fn width_policy(&self) -> WidthPolicy {
        WidthPolicy::Intrinsic
    }
}

/// Display-only chips: no state, clicks are forwarded as `(index, item)`.
pub struct Stateless<F> {
    on_click: F,
}

impl<F> Stateless<F> {
    pub fn new(on_click: F) -> Self {
        Self { on_click }
    }
}

impl<T, F> Selection<T> for Stateless<F>
where
    F: FnMut(usize, &T),
{
    fn select(&mut self, _index: usize) {}

    fn notify(&mut self, index: usize, items: &[T]) {
        match items.get(index) {
            Some(item) => (self.on_click)(index, item),
            None => log::warn!(
                "click on chip {index} ignored: only {} items",
                items.len()
            ),
        }
    }

    fn current(&self) -> SelectionState {
        SelectionState::NoSelection
    }

    fn is_selected(&self, _index: usize) -> bool {
        false
    }
}

/// At most one selected chip. Clicking any chip, including the selected one,
/// selects it; there is no deselect.
///
/// A click on an index past the end of the item list still selects that index,
/// but the callback is not run since there is no item to hand it. A warning is
/// logged instead.
pub struct SingleSelect<F> {
    selected: Option<usize>,
    on_selected: F,
}

impl<F> SingleSelect<F> {
    pub fn new(default_selected: Option<usize>, on_selected: F) -> Self {
        Self {
            selected: default_selected,
            on_selected,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl<T, F> Selection<T> for SingleSelect<F>
where
    F: FnMut(usize, &T),
{
    fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    fn notify(&mut self, index: usize, items: &[T]) {
        match items.get(index) {
            Some(item) => (self.on_selected)(index, item),
            None => log::warn!(
                "selected chip {index} has no item (only {}), skipping notification",
                items.len()
            ),
        }
    }

    fn current(&self) -> SelectionState {
        SelectionState::single(self.selected)
    }

    fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// A long single-select label truncates within one row instead of overflowing it.
    fn width_policy(&self) -> WidthPolicy {
        WidthPolicy::CapToMaxWidth
    }
}

/// Any number of selected chips; clicking flips membership.
///
/// The callback receives the new index set and the matching items, both in
/// ascending index order.
pub struct MultiSelect<F> {
    selected: BTreeSet<usize>,
    on_change: F,
}

impl<F> MultiSelect<F> {
    pub fn new(default_selected: impl IntoIterator<Item = usize>, on_change: F) -> Self {
        Self {
            selected: default_selected.into_iter().collect(),
            on_change,
        }
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }
}

impl<T, F> Selection<T> for MultiSelect<F>
where
    F: FnMut(&BTreeSet<usize>, Vec<&T>),
{
    fn select(&mut self, index: usize) {
        let mut next = self.selected.clone();
        if !next.remove(&index) {
            next.insert(index);
        }
        self.selected = next;
    }

    fn notify(&mut self, _index: usize, items: &[T]) {
        let resolved: Vec<&T> = self
            .selected
            .iter()
            .filter_map(|&selected| items.get(selected))
            .collect();
        if resolved.len() != self.selected.len() {
            log::warn!(
                "multi-selection {:?} refers past the {} available items",
                self.selected,
                items.len()
            );
        }
        (self.on_change)(&self.selected, resolved);
    }

    fn current(&self) -> SelectionState {
        SelectionState::Multi(self.selected.clone())
    }

    fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
