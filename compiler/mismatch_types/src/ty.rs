//! Closed type representation.
//!
//! Each structural shape a diagnostic can mention gets exactly one variant,
//! carrying exactly the fields needed to render or compare it.

use mismatch_ir::{ClassId, Variance};

/// A semantic type as reported by the host compiler.
///
/// Immutable once built. Nullability is a flag on every shape rather than a
/// wrapper variant, so `T?` renders as `T` plus one trailing `?`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    kind: TypeKind,
    nullable: bool,
}

/// Structural shape of a [`Type`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    /// Named class, possibly applied to type arguments.
    ///
    /// `class_id` is `None` for anonymous or unresolvable classes.
    Class {
        class_id: Option<ClassId>,
        arguments: Vec<TypeProjection>,
    },

    /// Function type `receiver.(parameters -> return_type)`.
    Function {
        receiver: Option<Box<Type>>,
        parameters: Vec<Type>,
        return_type: Box<Type>,
    },

    /// `A & B & ...`
    Intersection { conjuncts: Vec<Type> },

    /// Platform type bounded by `lower .. upper`.
    Flexible { lower: Box<Type>, upper: Box<Type> },

    /// `T & Any`: a type parameter forced to be non-null.
    DefinitelyNotNull { original: Box<Type> },

    /// Type produced by capturing a projection during inference.
    Captured { projection: Box<TypeProjection> },

    /// Unbound type parameter; any concrete type instantiates it.
    TypeParameter { name: String },

    /// Error type; nothing useful can be said about it.
    Error,
}

/// A type argument as written at a use site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeProjection {
    /// Bare wildcard `*`.
    Star,
    /// A concrete argument, optionally variance-annotated.
    Argument { variance: Variance, ty: Type },
}

impl Type {
    pub fn new(kind: TypeKind, nullable: bool) -> Self {
        Type { kind, nullable }
    }

    /// Class type from a fully qualified name.
    pub fn class(fq_name: &str, arguments: Vec<TypeProjection>) -> Self {
        Self::new(
            TypeKind::Class {
                class_id: Some(ClassId::parse(fq_name)),
                arguments,
            },
            false,
        )
    }

    /// Class type with no type arguments.
    pub fn simple(fq_name: &str) -> Self {
        Self::class(fq_name, Vec::new())
    }

    /// Class type whose identity cannot be resolved.
    pub fn unresolved_class(arguments: Vec<TypeProjection>) -> Self {
        Self::new(
            TypeKind::Class {
                class_id: None,
                arguments,
            },
            false,
        )
    }

    pub fn function(receiver: Option<Type>, parameters: Vec<Type>, return_type: Type) -> Self {
        Self::new(
            TypeKind::Function {
                receiver: receiver.map(Box::new),
                parameters,
                return_type: Box::new(return_type),
            },
            false,
        )
    }

    pub fn intersection(conjuncts: Vec<Type>) -> Self {
        Self::new(TypeKind::Intersection { conjuncts }, false)
    }

    pub fn flexible(lower: Type, upper: Type) -> Self {
        Self::new(
            TypeKind::Flexible {
                lower: Box::new(lower),
                upper: Box::new(upper),
            },
            false,
        )
    }

    pub fn definitely_not_null(original: Type) -> Self {
        Self::new(
            TypeKind::DefinitelyNotNull {
                original: Box::new(original),
            },
            false,
        )
    }

    pub fn captured(projection: TypeProjection) -> Self {
        Self::new(
            TypeKind::Captured {
                projection: Box::new(projection),
            },
            false,
        )
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::new(TypeKind::TypeParameter { name: name.into() }, false)
    }

    pub fn error() -> Self {
        Self::new(TypeKind::Error, false)
    }

    /// The same type, marked nullable.
    #[must_use]
    pub fn nullable(self) -> Self {
        self.with_nullability(true)
    }

    /// The same type with the given nullability.
    #[must_use]
    pub fn with_nullability(self, nullable: bool) -> Self {
        Type { nullable, ..self }
    }

    #[inline]
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// `"nullable"` or `"non-nullable"`.
    pub fn nullability_label(&self) -> &'static str {
        if self.nullable {
            "nullable"
        } else {
            "non-nullable"
        }
    }

    /// Class identity, for class types that have one.
    pub fn class_id(&self) -> Option<&ClassId> {
        match &self.kind {
            TypeKind::Class { class_id, .. } => class_id.as_ref(),
            _ => None,
        }
    }

    /// Type arguments of a class type; empty for every other shape.
    pub fn arguments(&self) -> &[TypeProjection] {
        match &self.kind {
            TypeKind::Class { arguments, .. } => arguments,
            _ => &[],
        }
    }

    pub fn is_type_parameter(&self) -> bool {
        matches!(self.kind, TypeKind::TypeParameter { .. })
    }
}

impl TypeProjection {
    /// Invariant argument.
    pub fn of(ty: Type) -> Self {
        TypeProjection::Argument {
            variance: Variance::Invariant,
            ty,
        }
    }

    pub fn with_variance(variance: Variance, ty: Type) -> Self {
        TypeProjection::Argument { variance, ty }
    }

    /// The projected type; `None` for a bare wildcard.
    pub fn ty(&self) -> Option<&Type> {
        match self {
            TypeProjection::Star => None,
            TypeProjection::Argument { ty, .. } => Some(ty),
        }
    }

    pub fn variance(&self) -> Variance {
        match self {
            TypeProjection::Star => Variance::Invariant,
            TypeProjection::Argument { variance, .. } => *variance,
        }
    }
}
