use crate::selection::Selection;
use crate::state::SelectionState;
use chipflow_ui_layout::WidthPolicy;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Single-threaded shared owner for a selection store.
///
/// Chip click handlers and the host each hold a clone. While the store's
/// callback runs, reads through any clone see the state the callback is being
/// told about, so a host can re-lay out from inside the notification. Toggling
/// is not re-entrant: a toggle issued from inside the callback is dropped with
/// a warning.
pub struct SelectionHandle<S> {
    shared: Rc<Shared<S>>,
}

struct Shared<S> {
    store: RefCell<S>,
    /// Set only while the store is lent to its own callback.
    notifying: RefCell<Option<Snapshot>>,
}

#[derive(Clone, Debug, Default)]
struct Snapshot {
    state: SelectionState,
    width_policy: WidthPolicy,
}

impl<S> Clone for SelectionHandle<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S> SelectionHandle<S> {
    pub fn new(store: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                store: RefCell::new(store),
                notifying: RefCell::new(None),
            }),
        }
    }

    /// Borrows the store, or `None` while its callback is running.
    pub fn try_borrow(&self) -> Option<Ref<'_, S>> {
        self.shared.store.try_borrow().ok()
    }

    /// Forwards to the store's [`Selection::select`] and
    /// [`Selection::notify`]. Returns `false` when the toggle was rejected
    /// because the store is mid-notification.
    pub fn toggle<T>(&self, index: usize, items: &[T]) -> bool
    where
        S: Selection<T>,
    {
        let snapshot = match self.shared.store.try_borrow_mut() {
            Ok(mut store) => {
                Selection::<T>::select(&mut *store, index);
                Snapshot {
                    state: Selection::<T>::current(&*store),
                    width_policy: Selection::<T>::width_policy(&*store),
                }
            }
            Err(_) => {
                log::warn!("re-entrant toggle of chip {index} rejected");
                return false;
            }
        };

        *self.shared.notifying.borrow_mut() = Some(snapshot);
        if let Ok(mut store) = self.shared.store.try_borrow_mut() {
            Selection::<T>::notify(&mut *store, index, items);
        }
        self.shared.notifying.borrow_mut().take();
        true
    }

    pub fn current<T>(&self) -> SelectionState
    where
        S: Selection<T>,
    {
        self.read(
            |store| Selection::<T>::current(store),
            |snapshot| snapshot.state.clone(),
        )
    }

    pub fn is_selected<T>(&self, index: usize) -> bool
    where
        S: Selection<T>,
    {
        self.read(
            |store| Selection::<T>::is_selected(store, index),
            |snapshot| snapshot.state.contains(index),
        )
    }

    fn width_policy_of<T>(&self) -> WidthPolicy
    where
        S: Selection<T>,
    {
        self.read(
            |store| Selection::<T>::width_policy(store),
            |snapshot| snapshot.width_policy,
        )
    }

    fn read<R>(&self, live: impl FnOnce(&S) -> R, notifying: impl FnOnce(&Snapshot) -> R) -> R {
        if let Ok(store) = self.shared.store.try_borrow() {
            return live(&store);
        }
        match self.shared.notifying.borrow().as_ref() {
            Some(snapshot) => notifying(snapshot),
            None => {
                log::warn!(
                    "selection store is busy outside a notification, reporting no selection"
                );
                notifying(&Snapshot::default())
            }
        }
    }
}

impl<S, T> Selection<T> for SelectionHandle<S>
where
    S: Selection<T>,
{
    fn select(&mut self, index: usize) {
        if let Ok(mut store) = self.shared.store.try_borrow_mut() {
            Selection::<T>::select(&mut *store, index);
        }
    }

    fn notify(&mut self, index: usize, items: &[T]) {
        if let Ok(mut store) = self.shared.store.try_borrow_mut() {
            Selection::<T>::notify(&mut *store, index, items);
        }
    }

    fn toggle(&mut self, index: usize, items: &[T]) {
        SelectionHandle::toggle(self, index, items);
    }

    fn current(&self) -> SelectionState {
        SelectionHandle::current::<T>(self)
    }

    fn is_selected(&self, index: usize) -> bool {
        SelectionHandle::is_selected::<T>(self, index)
    }

    fn width_policy(&self) -> WidthPolicy {
        self.width_policy_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MultiSelect, SingleSelect};
    use std::collections::BTreeSet;

    type Reader = Rc<RefCell<Option<Box<dyn Fn() -> (SelectionState, bool, WidthPolicy)>>>>;

    #[test]
    fn clones_share_one_store() {
        let items = ["a", "b", "c"];
        let handle = SelectionHandle::new(SingleSelect::new(None, |_: usize, _: &&str| {}));
        let other = handle.clone();

        assert!(other.toggle(2, &items[..]));
        assert_eq!(handle.current::<&str>(), SelectionState::Single(2));
        assert!(handle.is_selected::<&str>(2));
    }

    #[test]
    fn toggle_from_inside_the_callback_is_rejected() {
        let items = vec![1, 2, 3];
        let retoggle: Rc<RefCell<Option<Box<dyn Fn() -> bool>>>> = Rc::new(RefCell::new(None));
        let accepted = Rc::new(RefCell::new(Vec::new()));

        let inner_retoggle = Rc::clone(&retoggle);
        let inner_accepted = Rc::clone(&accepted);
        let store = MultiSelect::new([], move |_: &BTreeSet<usize>, _: Vec<&i32>| {
            if let Some(retoggle) = inner_retoggle.borrow().as_ref() {
                inner_accepted.borrow_mut().push(retoggle());
            }
        });
        let handle = SelectionHandle::new(store);
        let reentrant = handle.clone();
        let reentrant_items = items.clone();
        *retoggle.borrow_mut() = Some(Box::new(move || {
            reentrant.toggle(0, reentrant_items.as_slice())
        }));

        assert!(handle.toggle(1, items.as_slice()));
        assert_eq!(*accepted.borrow(), vec![false]);
        assert_eq!(handle.current::<i32>(), SelectionState::multi([1]));
    }

    #[test]
    fn reads_from_inside_the_callback_see_the_new_state() {
        let items = vec![1, 2, 3];
        let read: Reader = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let inner_read = Rc::clone(&read);
        let inner_seen = Rc::clone(&seen);
        let store = MultiSelect::new([0], move |_: &BTreeSet<usize>, _: Vec<&i32>| {
            if let Some(read) = inner_read.borrow().as_ref() {
                inner_seen.borrow_mut().push(read());
            }
        });
        let handle = SelectionHandle::new(store);
        let reader = handle.clone();
        *read.borrow_mut() = Some(Box::new(move || {
            (
                reader.current::<i32>(),
                reader.is_selected::<i32>(1),
                Selection::<i32>::width_policy(&reader),
            )
        }));

        assert!(handle.toggle(1, items.as_slice()));
        assert!(handle.toggle(0, items.as_slice()));
        assert_eq!(
            *seen.borrow(),
            vec![
                (SelectionState::multi([0, 1]), true, WidthPolicy::Intrinsic),
                (SelectionState::multi([1]), true, WidthPolicy::Intrinsic),
            ]
        );
        assert_eq!(handle.current::<i32>(), SelectionState::multi([1]));
    }

    #[test]
    fn store_is_lent_out_only_during_the_callback() {
        let items = ["a", "b"];
        let during: Rc<RefCell<Option<Box<dyn Fn() -> bool>>>> = Rc::new(RefCell::new(None));
        let lent = Rc::new(RefCell::new(Vec::new()));

        let inner_during = Rc::clone(&during);
        let inner_lent = Rc::clone(&lent);
        let handle = SelectionHandle::new(SingleSelect::new(None, move |_: usize, _: &&str| {
            if let Some(during) = inner_during.borrow().as_ref() {
                inner_lent.borrow_mut().push(during());
            }
        }));
        let peer = handle.clone();
        *during.borrow_mut() = Some(Box::new(move || {
            peer.try_borrow().is_none()
                && Selection::<&str>::width_policy(&peer) == WidthPolicy::CapToMaxWidth
                && peer.is_selected::<&str>(1)
        }));

        assert!(handle.toggle(1, &items[..]));
        assert_eq!(*lent.borrow(), vec![true]);
        assert_eq!(handle.try_borrow().and_then(|store| store.selected()), Some(1));
    }
}
