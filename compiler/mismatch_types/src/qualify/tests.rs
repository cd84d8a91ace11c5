use super::*;
use crate::TypeProjection;
use pretty_assertions::assert_eq;

fn kotlin_list() -> Type {
    Type::simple("kotlin.collections.List")
}

fn java_list() -> Type {
    Type::simple("java.util.List")
}

#[test]
fn same_short_name_different_packages_need_qualification() {
    assert_eq!(NameMatch::of(&kotlin_list(), &java_list()), NameMatch::ShortOnly);
    assert!(needs_qualification(&kotlin_list(), &java_list()));
}

#[test]
fn different_short_names_stay_short() {
    let int = Type::simple("kotlin.Int");
    assert_eq!(NameMatch::of(&kotlin_list(), &int), NameMatch::Different);
    assert!(!needs_qualification(&kotlin_list(), &int));
}

#[test]
fn identical_types_stay_short() {
    assert_eq!(NameMatch::of(&kotlin_list(), &kotlin_list()), NameMatch::Exact);
    assert!(!needs_qualification(&kotlin_list(), &kotlin_list()));
}

#[test]
fn clash_inside_type_arguments_counts() {
    let a = Type::class(
        "kotlin.collections.Set",
        vec![TypeProjection::of(kotlin_list())],
    );
    let b = Type::class(
        "kotlin.collections.Set",
        vec![TypeProjection::of(java_list())],
    );
    assert!(needs_qualification(&a, &b));
}

#[test]
fn nullability_difference_is_not_a_name_clash() {
    let a = Type::simple("kotlin.String");
    let b = Type::simple("kotlin.String").nullable();
    assert_eq!(NameMatch::of(&a, &b), NameMatch::Different);
}

#[test]
fn flags_mark_only_clashing_candidates() {
    let candidates = vec![kotlin_list(), Type::simple("kotlin.Int"), java_list()];
    assert_eq!(qualification_flags(&candidates), vec![true, false, true]);
}

#[test]
fn flags_ignore_exact_duplicates() {
    let candidates = vec![kotlin_list(), kotlin_list()];
    assert_eq!(qualification_flags(&candidates), vec![false, false]);
}

#[test]
fn flags_of_empty_list() {
    assert!(qualification_flags(&[]).is_empty());
}

#[test]
fn placeholder_renderings_compare_as_text() {
    assert_eq!(
        NameMatch::from_renderings(("??", "??"), ("??", "??")),
        NameMatch::Exact
    );
    assert_eq!(
        NameMatch::from_renderings(("??", "??"), ("Int", "kotlin.Int")),
        NameMatch::Different
    );
}
