//! Hint rendering for classified problems.
//!
//! Each problem variant maps to at most one hint:
//!
//! | Problem                              | Side   | Text                      |
//! |--------------------------------------|--------|---------------------------|
//! | expected/actual, nullability only    | after  | `: nullable ⇏ non-nullable` |
//! | expected/actual                      | after  | `: Actual ⇏ Expected`     |
//! | type mismatch                        | after  | `: A ≠ B`                 |
//! | variance mismatch                    | before | `out ≠ in`                |
//! | ambiguous type                       | after  | `<A or B>`                |
//!
//! `NoneApplicable` is explained per argument by the overload analyzer and
//! `AmbiguousCandidate` is not rendered.

use mismatch_ir::{anchor_after, anchor_before, Span};
use mismatch_types::{is_instantiation_of, needs_qualification, qualification_flags, Type};

use crate::presentation::{Hint, PresentationBuilder};
use crate::problem::Problem;

/// Separator between an actual type and the expected type it does not conform to.
pub const DOES_NOT_CONFORM: &str = " ⇏ ";

/// Separator between two incompatible types or variances.
pub const NOT_EQUAL: &str = " ≠ ";

/// Render the hint for `problem`.
///
/// `expression_type` yields the statically declared type of the annotated
/// expression; it is only called for general expected/actual mismatches.
/// Returns `None` when there are no ranges to anchor to or nothing
/// informative to show.
pub fn problem_hint(
    problem: &Problem,
    ranges: &[Span],
    expression_type: impl FnOnce() -> Option<Type>,
) -> Option<Hint> {
    match problem {
        Problem::ExpectedActualTypeMismatch {
            expected_type,
            actual_type,
            due_to_nullability: true,
        } => {
            let actual = actual_type.nullability_label();
            let expected = expected_type.nullability_label();
            if actual == expected {
                return None;
            }
            hint_after(ranges, |b| {
                b.text(": ");
                b.text(actual);
                b.text(DOES_NOT_CONFORM);
                b.text(expected);
            })
        }

        Problem::ExpectedActualTypeMismatch {
            expected_type,
            actual_type,
            due_to_nullability: false,
        } => {
            let actual = choose_better_actual_type(expression_type(), actual_type);
            if &actual == expected_type {
                return None;
            }
            let qualified = needs_qualification(&actual, expected_type);
            hint_after(ranges, |b| {
                b.text(": ");
                b.ty(&actual, qualified);
                b.text(DOES_NOT_CONFORM);
                b.ty(expected_type, qualified);
            })
        }

        Problem::TypeMismatch { type_a, type_b } => {
            if type_a == type_b {
                return None;
            }
            let qualified = needs_qualification(type_a, type_b);
            hint_after(ranges, |b| {
                b.text(": ");
                b.ty(type_a, qualified);
                b.text(NOT_EQUAL);
                b.ty(type_b, qualified);
            })
        }

        Problem::TypeVarianceMismatch {
            expected_variance,
            actual_variance,
        } => {
            let offset = anchor_before(ranges)?;
            let mut b = PresentationBuilder::new();
            b.text(expected_variance.label());
            b.text(NOT_EQUAL);
            b.text(actual_variance.label());
            Some(Hint::before(offset, b.finish()))
        }

        Problem::AmbiguousType { candidates } => {
            if candidates.is_empty() {
                return None;
            }
            let flags = qualification_flags(candidates);
            hint_after(ranges, |b| {
                b.text("<");
                for (i, (candidate, &qualified)) in candidates.iter().zip(&flags).enumerate() {
                    if i > 0 {
                        b.text(" or ");
                    }
                    b.ty(candidate, qualified);
                }
                b.text(">");
            })
        }

        Problem::NoneApplicable { .. } | Problem::AmbiguousCandidate { .. } => None,
    }
}

/// Prefer the expression's declared type when it is a more specific
/// instantiation of the type the diagnostic reported.
///
/// Diagnostics may report a widened type (`List<T>`) where the expression is
/// known to be `List<Int>`; the latter explains more.
pub fn choose_better_actual_type(expression_type: Option<Type>, reported: &Type) -> Type {
    match expression_type {
        Some(declared) if is_instantiation_of(&declared, reported) => declared,
        _ => reported.clone(),
    }
}

fn hint_after(ranges: &[Span], build: impl FnOnce(&mut PresentationBuilder)) -> Option<Hint> {
    let offset = anchor_after(ranges)?;
    let mut builder = PresentationBuilder::new();
    build(&mut builder);
    Some(Hint::after(offset, builder.finish()))
}
