//! Problem classification.
//!
//! A [`Problem`] is what a hint explains. Many diagnostics collapse onto the
//! same problem: every flavour of "expected X, found Y" becomes an
//! [`Problem::ExpectedActualTypeMismatch`]. Some diagnostics imply one side of
//! the comparison (a condition must be a boolean), which is filled in from
//! [`BuiltinTypes`].

use mismatch_ir::{Symbol, Variance};
use mismatch_types::Type;

use crate::diagnostic::{DiagnosticKind, RawDiagnostic};

/// Built-in types that some diagnostics imply rather than carry.
///
/// Passed explicitly to classification; hosts for other languages supply
/// their own.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BuiltinTypes {
    pub boolean: Type,
    pub throwable: Type,
    /// The bottom type, nullable: the type of a `null` literal.
    pub nullable_nothing: Type,
}

impl Default for BuiltinTypes {
    fn default() -> Self {
        Self {
            boolean: Type::simple("kotlin.Boolean"),
            throwable: Type::simple("kotlin.Throwable"),
            nullable_nothing: Type::simple("kotlin.Nothing").nullable(),
        }
    }
}

/// What went wrong, reduced to what a hint can show.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Problem {
    /// An expression's type disagrees with the type its context expects.
    ///
    /// `due_to_nullability` is set when nullability is the only difference.
    ExpectedActualTypeMismatch {
        expected_type: Type,
        actual_type: Type,
        due_to_nullability: bool,
    },

    /// Two types are incompatible, with no expected/actual direction.
    TypeMismatch { type_a: Type, type_b: Type },

    /// A type parameter used at a position its variance forbids.
    TypeVarianceMismatch {
        expected_variance: Variance,
        actual_variance: Variance,
    },

    /// No overload of a call is applicable.
    NoneApplicable { candidates: Vec<Symbol> },

    /// Several types are equally valid, e.g. an ambiguous `super`.
    AmbiguousType { candidates: Vec<Type> },

    /// Several overloads tie for best match. Not rendered.
    AmbiguousCandidate { candidates: Vec<Symbol> },
}

impl Problem {
    /// Classify an adapted diagnostic.
    pub fn from_kind(kind: &DiagnosticKind, builtins: &BuiltinTypes) -> Problem {
        use DiagnosticKind as K;

        match kind {
            K::TypeMismatch {
                expected,
                actual,
                due_to_nullability,
            }
            | K::ArgumentTypeMismatch {
                expected,
                actual,
                due_to_nullability,
            }
            | K::InitializerTypeMismatch {
                expected,
                actual,
                due_to_nullability,
            }
            | K::AssignmentTypeMismatch {
                expected,
                actual,
                due_to_nullability,
            }
            | K::ReturnTypeMismatch {
                expected,
                actual,
                due_to_nullability,
            } => Self::expected_actual(expected, actual, *due_to_nullability),

            K::TypeMismatchWhenFlexibilityChanges { expected, actual }
            | K::JavaTypeMismatch { expected, actual }
            | K::ResultTypeMismatch { expected, actual } => {
                Self::expected_actual(expected, actual, false)
            }

            K::ConditionTypeMismatch {
                actual,
                due_to_nullability,
            } => Self::expected_actual(&builtins.boolean, actual, *due_to_nullability),
            K::ThrowableTypeMismatch {
                actual,
                due_to_nullability,
            } => Self::expected_actual(&builtins.throwable, actual, *due_to_nullability),
            K::NullForNonnullType { expected } => {
                Self::expected_actual(expected, &builtins.nullable_nothing, false)
            }
            K::UpperBoundViolated {
                expected_upper_bound,
                actual_upper_bound,
            } => Self::expected_actual(expected_upper_bound, actual_upper_bound, false),

            K::IncompatibleTypes { type_a, type_b }
            | K::IncompatibleTypesWarning { type_a, type_b } => Problem::TypeMismatch {
                type_a: type_a.clone(),
                type_b: type_b.clone(),
            },

            K::TypeVarianceConflictError {
                type_parameter_variance,
                variance,
            }
            | K::TypeVarianceConflictInExpandedType {
                type_parameter_variance,
                variance,
            } => Problem::TypeVarianceMismatch {
                expected_variance: *type_parameter_variance,
                actual_variance: *variance,
            },

            K::NoneApplicable { candidates } => Problem::NoneApplicable {
                candidates: candidates.clone(),
            },
            K::InapplicableCandidate { candidate } => Problem::NoneApplicable {
                candidates: vec![candidate.clone()],
            },
            K::AmbiguousSuper { candidates } => Problem::AmbiguousType {
                candidates: candidates.clone(),
            },
            K::OverloadResolutionAmbiguity { candidates } => Problem::AmbiguousCandidate {
                candidates: candidates.clone(),
            },
        }
    }

    fn expected_actual(expected: &Type, actual: &Type, due_to_nullability: bool) -> Problem {
        Problem::ExpectedActualTypeMismatch {
            expected_type: expected.clone(),
            actual_type: actual.clone(),
            due_to_nullability,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Problem::ExpectedActualTypeMismatch { .. } => "expected-actual type mismatch",
            Problem::TypeMismatch { .. } => "type mismatch",
            Problem::TypeVarianceMismatch { .. } => "type variance mismatch",
            Problem::NoneApplicable { .. } => "none applicable",
            Problem::AmbiguousType { .. } => "ambiguous type",
            Problem::AmbiguousCandidate { .. } => "ambiguous candidate",
        }
    }
}

/// Classify a raw diagnostic; `None` if it is not one this crate explains.
pub fn classify(diagnostic: &RawDiagnostic, builtins: &BuiltinTypes) -> Option<Problem> {
    let kind = DiagnosticKind::from_raw(diagnostic)?;
    let problem = Problem::from_kind(&kind, builtins);
    tracing::trace!(
        factory = kind.factory_name(),
        problem = problem.name(),
        "classified"
    );
    Some(problem)
}
