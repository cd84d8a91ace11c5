use super::*;

#[test]
fn labels_are_empty_only_for_invariant() {
    assert_eq!(Variance::Invariant.label(), "");
    assert_eq!(Variance::In.label(), "in");
    assert_eq!(Variance::Out.label(), "out");
}

#[test]
fn display_matches_label() {
    assert_eq!(Variance::Invariant.to_string(), "");
    assert_eq!(Variance::In.to_string(), "in");
    assert_eq!(Variance::Out.to_string(), "out");
}

#[test]
fn default_is_invariant() {
    assert!(Variance::default().is_invariant());
    assert!(!Variance::Out.is_invariant());
}
