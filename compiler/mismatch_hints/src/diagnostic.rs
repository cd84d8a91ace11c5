//! Raw compiler diagnostics and the adapter onto the internal closed set.
//!
//! Hosts hand over [`RawDiagnostic`]s: a factory name, a bag of typed payload
//! fields and the ranges the diagnostic covers. [`DIAGNOSTIC_ADAPTERS`] maps
//! each recognized factory name to a function that picks the fields that
//! diagnostic needs and builds a [`DiagnosticKind`]. Everything past this
//! module only sees `DiagnosticKind`.
//!
//! Supporting another diagnostic means one table row, one adapter and one
//! `DiagnosticKind` variant. Rendering is untouched.

use mismatch_ir::{Span, Symbol, Variance};
use mismatch_types::Type;

/// Which checker sets diagnostics are collected from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CheckerFilter {
    /// Checkers that are always on.
    OnlyCommonCheckers,
    /// Opt-in and experimental checkers only.
    OnlyExtendedCheckers,
    ExtendedAndCommonCheckers,
}

/// Kind-specific fields of a raw diagnostic.
///
/// Each diagnostic fills in only the fields it has; adapters read only the
/// fields they need.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct DiagnosticPayload {
    pub expected_type: Option<Type>,
    pub actual_type: Option<Type>,
    pub type_a: Option<Type>,
    pub type_b: Option<Type>,
    pub expected_upper_bound: Option<Type>,
    pub actual_upper_bound: Option<Type>,
    pub mismatch_due_to_nullability: bool,
    pub type_parameter_variance: Option<Variance>,
    pub variance: Option<Variance>,
    pub candidate: Option<Symbol>,
    pub candidate_symbols: Vec<Symbol>,
    pub candidate_types: Vec<Type>,
}

impl DiagnosticPayload {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_expected(mut self, ty: Type) -> Self {
        self.expected_type = Some(ty);
        self
    }

    #[must_use]
    pub fn with_actual(mut self, ty: Type) -> Self {
        self.actual_type = Some(ty);
        self
    }

    #[must_use]
    pub fn with_types(mut self, type_a: Type, type_b: Type) -> Self {
        self.type_a = Some(type_a);
        self.type_b = Some(type_b);
        self
    }

    #[must_use]
    pub fn with_upper_bounds(mut self, expected: Type, actual: Type) -> Self {
        self.expected_upper_bound = Some(expected);
        self.actual_upper_bound = Some(actual);
        self
    }

    #[must_use]
    pub fn due_to_nullability(mut self, value: bool) -> Self {
        self.mismatch_due_to_nullability = value;
        self
    }

    #[must_use]
    pub fn with_variances(mut self, type_parameter_variance: Variance, variance: Variance) -> Self {
        self.type_parameter_variance = Some(type_parameter_variance);
        self.variance = Some(variance);
        self
    }

    #[must_use]
    pub fn with_candidate(mut self, candidate: Symbol) -> Self {
        self.candidate = Some(candidate);
        self
    }

    #[must_use]
    pub fn with_candidate_symbols(mut self, candidates: Vec<Symbol>) -> Self {
        self.candidate_symbols = candidates;
        self
    }

    #[must_use]
    pub fn with_candidate_types(mut self, candidates: Vec<Type>) -> Self {
        self.candidate_types = candidates;
        self
    }
}

/// A diagnostic as reported by the host compiler.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RawDiagnostic {
    /// Compiler factory name, e.g. `TYPE_MISMATCH`.
    pub factory_name: String,
    pub payload: DiagnosticPayload,
    /// Ranges covered; may be empty.
    pub ranges: Vec<Span>,
}

impl RawDiagnostic {
    pub fn new(
        factory_name: impl Into<String>,
        payload: DiagnosticPayload,
        ranges: Vec<Span>,
    ) -> Self {
        Self {
            factory_name: factory_name.into(),
            payload,
            ranges,
        }
    }
}

/// The recognized diagnostics, each with exactly its payload.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DiagnosticKind {
    TypeMismatch {
        expected: Type,
        actual: Type,
        due_to_nullability: bool,
    },
    TypeMismatchWhenFlexibilityChanges {
        expected: Type,
        actual: Type,
    },
    JavaTypeMismatch {
        expected: Type,
        actual: Type,
    },
    ArgumentTypeMismatch {
        expected: Type,
        actual: Type,
        due_to_nullability: bool,
    },
    InitializerTypeMismatch {
        expected: Type,
        actual: Type,
        due_to_nullability: bool,
    },
    AssignmentTypeMismatch {
        expected: Type,
        actual: Type,
        due_to_nullability: bool,
    },
    ResultTypeMismatch {
        expected: Type,
        actual: Type,
    },
    ReturnTypeMismatch {
        expected: Type,
        actual: Type,
        due_to_nullability: bool,
    },
    /// Condition is not a boolean; the expected type is implied.
    ConditionTypeMismatch {
        actual: Type,
        due_to_nullability: bool,
    },
    /// Thrown value is not a throwable; the expected type is implied.
    ThrowableTypeMismatch {
        actual: Type,
        due_to_nullability: bool,
    },
    /// `null` where a non-null type is required; the actual type is implied.
    NullForNonnullType {
        expected: Type,
    },
    UpperBoundViolated {
        expected_upper_bound: Type,
        actual_upper_bound: Type,
    },
    IncompatibleTypes {
        type_a: Type,
        type_b: Type,
    },
    IncompatibleTypesWarning {
        type_a: Type,
        type_b: Type,
    },
    TypeVarianceConflictError {
        type_parameter_variance: Variance,
        variance: Variance,
    },
    TypeVarianceConflictInExpandedType {
        type_parameter_variance: Variance,
        variance: Variance,
    },
    NoneApplicable {
        candidates: Vec<Symbol>,
    },
    InapplicableCandidate {
        candidate: Symbol,
    },
    AmbiguousSuper {
        candidates: Vec<Type>,
    },
    OverloadResolutionAmbiguity {
        candidates: Vec<Symbol>,
    },
}

/// Builds a [`DiagnosticKind`] from a payload, or `None` if a field is missing.
pub type Adapter = fn(&DiagnosticPayload) -> Option<DiagnosticKind>;

/// Factory name to adapter, one row per recognized diagnostic.
pub const DIAGNOSTIC_ADAPTERS: &[(&str, Adapter)] = &[
    ("TYPE_MISMATCH", type_mismatch),
    (
        "TYPE_MISMATCH_WHEN_FLEXIBILITY_CHANGES",
        type_mismatch_when_flexibility_changes,
    ),
    ("JAVA_TYPE_MISMATCH", java_type_mismatch),
    ("ARGUMENT_TYPE_MISMATCH", argument_type_mismatch),
    ("INITIALIZER_TYPE_MISMATCH", initializer_type_mismatch),
    ("ASSIGNMENT_TYPE_MISMATCH", assignment_type_mismatch),
    ("RESULT_TYPE_MISMATCH", result_type_mismatch),
    ("RETURN_TYPE_MISMATCH", return_type_mismatch),
    ("CONDITION_TYPE_MISMATCH", condition_type_mismatch),
    ("THROWABLE_TYPE_MISMATCH", throwable_type_mismatch),
    ("NULL_FOR_NONNULL_TYPE", null_for_nonnull_type),
    ("UPPER_BOUND_VIOLATED", upper_bound_violated),
    ("INCOMPATIBLE_TYPES", incompatible_types),
    ("INCOMPATIBLE_TYPES_WARNING", incompatible_types_warning),
    ("TYPE_VARIANCE_CONFLICT_ERROR", type_variance_conflict_error),
    (
        "TYPE_VARIANCE_CONFLICT_IN_EXPANDED_TYPE",
        type_variance_conflict_in_expanded_type,
    ),
    ("NONE_APPLICABLE", none_applicable),
    ("INAPPLICABLE_CANDIDATE", inapplicable_candidate),
    ("AMBIGUOUS_SUPER", ambiguous_super),
    ("OVERLOAD_RESOLUTION_AMBIGUITY", overload_resolution_ambiguity),
];

impl DiagnosticKind {
    /// Translate a raw diagnostic.
    ///
    /// Returns `None` for unrecognized factory names and for recognized
    /// diagnostics missing a required payload field.
    pub fn from_raw(raw: &RawDiagnostic) -> Option<Self> {
        let Some(&(_, adapt)) = DIAGNOSTIC_ADAPTERS
            .iter()
            .find(|(name, _)| *name == raw.factory_name)
        else {
            tracing::trace!(factory = %raw.factory_name, "unrecognized diagnostic");
            return None;
        };
        let kind = adapt(&raw.payload);
        if kind.is_none() {
            tracing::trace!(factory = %raw.factory_name, "diagnostic payload incomplete");
        }
        kind
    }

    /// The compiler factory name this kind is adapted from.
    pub fn factory_name(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::TypeMismatchWhenFlexibilityChanges { .. } => {
                "TYPE_MISMATCH_WHEN_FLEXIBILITY_CHANGES"
            }
            Self::JavaTypeMismatch { .. } => "JAVA_TYPE_MISMATCH",
            Self::ArgumentTypeMismatch { .. } => "ARGUMENT_TYPE_MISMATCH",
            Self::InitializerTypeMismatch { .. } => "INITIALIZER_TYPE_MISMATCH",
            Self::AssignmentTypeMismatch { .. } => "ASSIGNMENT_TYPE_MISMATCH",
            Self::ResultTypeMismatch { .. } => "RESULT_TYPE_MISMATCH",
            Self::ReturnTypeMismatch { .. } => "RETURN_TYPE_MISMATCH",
            Self::ConditionTypeMismatch { .. } => "CONDITION_TYPE_MISMATCH",
            Self::ThrowableTypeMismatch { .. } => "THROWABLE_TYPE_MISMATCH",
            Self::NullForNonnullType { .. } => "NULL_FOR_NONNULL_TYPE",
            Self::UpperBoundViolated { .. } => "UPPER_BOUND_VIOLATED",
            Self::IncompatibleTypes { .. } => "INCOMPATIBLE_TYPES",
            Self::IncompatibleTypesWarning { .. } => "INCOMPATIBLE_TYPES_WARNING",
            Self::TypeVarianceConflictError { .. } => "TYPE_VARIANCE_CONFLICT_ERROR",
            Self::TypeVarianceConflictInExpandedType { .. } => {
                "TYPE_VARIANCE_CONFLICT_IN_EXPANDED_TYPE"
            }
            Self::NoneApplicable { .. } => "NONE_APPLICABLE",
            Self::InapplicableCandidate { .. } => "INAPPLICABLE_CANDIDATE",
            Self::AmbiguousSuper { .. } => "AMBIGUOUS_SUPER",
            Self::OverloadResolutionAmbiguity { .. } => "OVERLOAD_RESOLUTION_AMBIGUITY",
        }
    }
}

// Adapters

fn expected_and_actual(p: &DiagnosticPayload) -> Option<(Type, Type)> {
    Some((p.expected_type.clone()?, p.actual_type.clone()?))
}

fn type_a_and_b(p: &DiagnosticPayload) -> Option<(Type, Type)> {
    Some((p.type_a.clone()?, p.type_b.clone()?))
}

fn variances(p: &DiagnosticPayload) -> Option<(Variance, Variance)> {
    Some((p.type_parameter_variance?, p.variance?))
}

fn type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::TypeMismatch {
        expected,
        actual,
        due_to_nullability: p.mismatch_due_to_nullability,
    })
}

fn type_mismatch_when_flexibility_changes(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::TypeMismatchWhenFlexibilityChanges { expected, actual })
}

fn java_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::JavaTypeMismatch { expected, actual })
}

fn argument_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::ArgumentTypeMismatch {
        expected,
        actual,
        due_to_nullability: p.mismatch_due_to_nullability,
    })
}

fn initializer_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::InitializerTypeMismatch {
        expected,
        actual,
        due_to_nullability: p.mismatch_due_to_nullability,
    })
}

fn assignment_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::AssignmentTypeMismatch {
        expected,
        actual,
        due_to_nullability: p.mismatch_due_to_nullability,
    })
}

fn result_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::ResultTypeMismatch { expected, actual })
}

fn return_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (expected, actual) = expected_and_actual(p)?;
    Some(DiagnosticKind::ReturnTypeMismatch {
        expected,
        actual,
        due_to_nullability: p.mismatch_due_to_nullability,
    })
}

fn condition_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::ConditionTypeMismatch {
        actual: p.actual_type.clone()?,
        due_to_nullability: p.mismatch_due_to_nullability,
    })
}

fn throwable_type_mismatch(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::ThrowableTypeMismatch {
        actual: p.actual_type.clone()?,
        due_to_nullability: p.mismatch_due_to_nullability,
    })
}

fn null_for_nonnull_type(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::NullForNonnullType {
        expected: p.expected_type.clone()?,
    })
}

fn upper_bound_violated(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::UpperBoundViolated {
        expected_upper_bound: p.expected_upper_bound.clone()?,
        actual_upper_bound: p.actual_upper_bound.clone()?,
    })
}

fn incompatible_types(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (type_a, type_b) = type_a_and_b(p)?;
    Some(DiagnosticKind::IncompatibleTypes { type_a, type_b })
}

fn incompatible_types_warning(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (type_a, type_b) = type_a_and_b(p)?;
    Some(DiagnosticKind::IncompatibleTypesWarning { type_a, type_b })
}

fn type_variance_conflict_error(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (type_parameter_variance, variance) = variances(p)?;
    Some(DiagnosticKind::TypeVarianceConflictError {
        type_parameter_variance,
        variance,
    })
}

fn type_variance_conflict_in_expanded_type(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    let (type_parameter_variance, variance) = variances(p)?;
    Some(DiagnosticKind::TypeVarianceConflictInExpandedType {
        type_parameter_variance,
        variance,
    })
}

fn none_applicable(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::NoneApplicable {
        candidates: p.candidate_symbols.clone(),
    })
}

fn inapplicable_candidate(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::InapplicableCandidate {
        candidate: p.candidate.clone()?,
    })
}

fn ambiguous_super(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::AmbiguousSuper {
        candidates: p.candidate_types.clone(),
    })
}

fn overload_resolution_ambiguity(p: &DiagnosticPayload) -> Option<DiagnosticKind> {
    Some(DiagnosticKind::OverloadResolutionAmbiguity {
        candidates: p.candidate_symbols.clone(),
    })
}
