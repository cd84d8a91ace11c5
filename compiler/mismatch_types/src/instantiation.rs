//! Generic-instantiation comparison.

use crate::{Type, TypeKind};

/// Whether `candidate` is a more specific instantiation of `reference`.
///
/// An unbound type parameter is instantiated by anything. Otherwise both
/// must be class types with the same identity and the same number of type
/// arguments, and every argument pair must carry a concrete type that
/// satisfies this rule recursively. A bare `*` on either side fails.
///
/// Nullability is not compared.
pub fn is_instantiation_of(candidate: &Type, reference: &Type) -> bool {
    if reference.is_type_parameter() {
        return true;
    }

    let (
        TypeKind::Class {
            class_id: Some(candidate_id),
            arguments: candidate_args,
        },
        TypeKind::Class {
            class_id: Some(reference_id),
            arguments: reference_args,
        },
    ) = (candidate.kind(), reference.kind())
    else {
        return false;
    };

    if candidate_id != reference_id || candidate_args.len() != reference_args.len() {
        return false;
    }

    candidate_args
        .iter()
        .zip(reference_args)
        .all(|(a, b)| match (a.ty(), b.ty()) {
            (Some(a), Some(b)) => is_instantiation_of(a, b),
            _ => false,
        })
}
