use std::collections::BTreeSet;

/// Snapshot of what is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Single(usize),
    Multi(BTreeSet<usize>),
}

impl SelectionState {
    pub fn single(index: Option<usize>) -> Self {
        index.map_or(SelectionState::NoSelection, SelectionState::Single)
    }

    pub fn multi(indices: impl IntoIterator<Item = usize>) -> Self {
        SelectionState::Multi(indices.into_iter().collect())
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            SelectionState::NoSelection => false,
            SelectionState::Single(selected) => *selected == index,
            SelectionState::Multi(selected) => selected.contains(&index),
        }
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            SelectionState::NoSelection => Vec::new(),
            SelectionState::Single(selected) => vec![*selected],
            SelectionState::Multi(selected) => selected.iter().copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SelectionState::NoSelection => true,
            SelectionState::Single(_) => false,
            SelectionState::Multi(selected) => selected.is_empty(),
        }
    }
}
