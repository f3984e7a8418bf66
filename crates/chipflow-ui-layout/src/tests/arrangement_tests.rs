use super::{Arrangement, SpacedBy};

#[test]
fn spaced_by_uses_fixed_spacing() {
    let sizes = vec![60, 60, 60];
    let mut positions = vec![0; sizes.len()];
    let extent = SpacedBy(10).arrange(&sizes, &mut positions);
    assert_eq!(positions, vec![0, 70, 140]);
    assert_eq!(extent, 200);
}

#[test]
fn empty_children_occupy_nothing() {
    let extent = SpacedBy(8).arrange(&[], &mut []);
    assert_eq!(extent, 0);
}

#[test]
fn negative_spacing_is_treated_as_zero() {
    let sizes = vec![5, 5];
    let mut positions = vec![0; 2];
    let extent = SpacedBy(-3).arrange(&sizes, &mut positions);
    assert_eq!(positions, vec![0, 5]);
    assert_eq!(extent, 10);
}
