use super::Constraints;

#[test]
fn fixed_width_leaves_height_open() {
    let constraints = Constraints::fixed_width(120);
    assert!(constraints.has_fixed_width());
    assert!(!constraints.has_bounded_height());
    assert_eq!(constraints.constrain(300, 48), (120, 48));
}

#[test]
fn unbounded_width_is_reported() {
    assert!(!Constraints::unbounded().has_bounded_width());
    assert!(Constraints::loose(360, Constraints::INFINITY).has_bounded_width());
}

#[test]
fn constrain_clamps_both_axes() {
    let constraints = Constraints::loose(100, 50);
    assert_eq!(constraints.constrain(150, -4), (100, 0));
    assert_eq!(Constraints::fixed_width(10).constrain(0, 20), (10, 20));
}
