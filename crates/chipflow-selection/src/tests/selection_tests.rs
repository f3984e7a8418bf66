use super::*;
use std::cell::RefCell;
use std::rc::Rc;

const TAGS: [&str; 6] = ["Tag 1", "Tag 2", "Tag 33", "Tag 4!", "Long tag test", "A+"];

#[test]
fn stateless_forwards_clicks_without_state() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    let mut store = Stateless::new(move |index: usize, item: &&str| {
        sink.borrow_mut().push((index, item.to_string()));
    });

    store.toggle(3, &TAGS);
    store.toggle(3, &TAGS);

    assert_eq!(
        *clicks.borrow(),
        vec![(3, "Tag 4!".to_string()), (3, "Tag 4!".to_string())]
    );
    assert_eq!(Selection::<&str>::current(&store), SelectionState::NoSelection);
    assert!(!Selection::<&str>::is_selected(&store, 3));
    assert_eq!(
        Selection::<&str>::width_policy(&store),
        WidthPolicy::Intrinsic
    );
}

#[test]
fn single_select_reclick_keeps_selection() {
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    let mut store = SingleSelect::new(None, move |index: usize, item: &&'static str| {
        sink.borrow_mut().push((index, *item));
    });
    assert_eq!(Selection::<&str>::current(&store), SelectionState::NoSelection);

    store.toggle(2, &TAGS);
    store.toggle(5, &TAGS);
    assert_eq!(Selection::<&str>::current(&store), SelectionState::Single(5));

    store.toggle(5, &TAGS);
    assert_eq!(store.selected(), Some(5));
    assert_eq!(
        *notified.borrow(),
        vec![(2, "Tag 33"), (5, "A+"), (5, "A+")]
    );
}

#[test]
fn single_select_starts_from_default_and_caps_width() {
    let store = SingleSelect::new(Some(0), |_: usize, _: &&str| {});
    assert!(Selection::<&str>::is_selected(&store, 0));
    assert!(!Selection::<&str>::is_selected(&store, 1));
    assert_eq!(
        Selection::<&str>::width_policy(&store),
        WidthPolicy::CapToMaxWidth
    );
}

#[test]
fn multi_select_toggles_membership() {
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    let mut store = MultiSelect::new([1, 3], move |indices: &BTreeSet<usize>, items: Vec<&&str>| {
        let items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
        sink.borrow_mut()
            .push((indices.iter().copied().collect::<Vec<_>>(), items));
    });

    store.toggle(3, &TAGS);
    assert_eq!(Selection::<&str>::current(&store), SelectionState::multi([1]));
    store.toggle(3, &TAGS);
    assert_eq!(Selection::<&str>::current(&store), SelectionState::multi([1, 3]));

    let notified = notified.borrow();
    assert_eq!(notified.len(), 2);
    assert_eq!(notified[0], (vec![1], vec!["Tag 2".to_string()]));
    assert_eq!(
        notified[1],
        (vec![1, 3], vec!["Tag 2".to_string(), "Tag 4!".to_string()])
    );
}

#[test]
fn multi_select_reports_items_in_index_order() {
    let last = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&last);
    let mut store = MultiSelect::new([], move |_: &BTreeSet<usize>, items: Vec<&&'static str>| {
        *sink.borrow_mut() = items.into_iter().copied().collect::<Vec<&str>>();
    });

    store.toggle(4, &TAGS);
    store.toggle(0, &TAGS);
    store.toggle(2, &TAGS);

    assert_eq!(*last.borrow(), vec!["Tag 1", "Tag 33", "Long tag test"]);
    assert_eq!(
        Selection::<&str>::width_policy(&store),
        WidthPolicy::Intrinsic
    );
}

#[test]
fn out_of_range_index_updates_state_without_an_item() {
    let single_calls = Rc::new(RefCell::new(0));
    let single_sink = Rc::clone(&single_calls);
    let mut single = SingleSelect::new(None, move |_: usize, _: &&str| {
        *single_sink.borrow_mut() += 1;
    });
    single.toggle(42, &TAGS);
    assert_eq!(single.selected(), Some(42));
    assert_eq!(*single_calls.borrow(), 0);

    let resolved = Rc::new(RefCell::new(Vec::new()));
    let multi_sink = Rc::clone(&resolved);
    let mut multi = MultiSelect::new([0], move |_: &BTreeSet<usize>, items: Vec<&&str>| {
        multi_sink.borrow_mut().push(items.len());
    });
    multi.toggle(42, &TAGS);
    assert!(multi.selected().contains(&42));
    assert_eq!(*resolved.borrow(), vec![1]);
}

#[test]
fn state_helpers() {
    assert!(SelectionState::NoSelection.is_empty());
    assert!(SelectionState::multi([]).is_empty());
    assert_eq!(SelectionState::single(Some(4)).indices(), vec![4]);
    assert_eq!(SelectionState::multi([9, 2, 5]).indices(), vec![2, 5, 9]);
    assert!(SelectionState::Single(1).contains(1));
    assert!(!SelectionState::Single(1).contains(2));
}
