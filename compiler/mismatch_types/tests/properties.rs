//! Property-based tests for type comparison and rendering.
//!
//! Generates random class types and checks:
//! 1. Reflexivity: every class type is an instantiation of itself
//! 2. Type-parameter references accept any candidate
//! 3. Qualification decisions are symmetric
//! 4. Rendering is deterministic and short names are never longer

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mismatch_ir::Variance;
use mismatch_types::{is_instantiation_of, needs_qualification, Type, TypeProjection};
use proptest::prelude::*;

fn fq_name_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["kotlin", "java.util", "org.example", "kotlin.collections"]),
        prop::sample::select(vec!["List", "Int", "String", "Map", "Box"]),
    )
        .prop_map(|(package, name)| format!("{package}.{name}"))
}

fn variance_strategy() -> impl Strategy<Value = Variance> {
    prop_oneof![
        Just(Variance::Invariant),
        Just(Variance::In),
        Just(Variance::Out)
    ]
}

/// Class types whose arguments always carry a type (no bare `*`).
fn concrete_class_strategy() -> impl Strategy<Value = Type> {
    let leaf = (fq_name_strategy(), any::<bool>())
        .prop_map(|(name, nullable)| Type::simple(&name).with_nullability(nullable));
    leaf.prop_recursive(3, 16, 3, |inner| {
        (
            fq_name_strategy(),
            prop::collection::vec((variance_strategy(), inner), 0..3),
        )
            .prop_map(|(name, args)| {
                Type::class(
                    &name,
                    args.into_iter()
                        .map(|(variance, ty)| TypeProjection::with_variance(variance, ty))
                        .collect(),
                )
            })
    })
}

fn any_type_strategy() -> impl Strategy<Value = Type> {
    prop_oneof![
        concrete_class_strategy(),
        concrete_class_strategy().prop_map(|ty| Type::function(None, vec![ty.clone()], ty)),
        Just(Type::error()),
        Just(Type::type_parameter("T")),
    ]
}

proptest! {
    #[test]
    fn instantiation_is_reflexive_for_class_types(ty in concrete_class_strategy()) {
        prop_assert!(is_instantiation_of(&ty, &ty));
    }

    #[test]
    fn type_parameter_reference_accepts_anything(ty in any_type_strategy()) {
        prop_assert!(is_instantiation_of(&ty, &Type::type_parameter("R")));
    }

    #[test]
    fn qualification_is_symmetric(a in any_type_strategy(), b in any_type_strategy()) {
        prop_assert_eq!(needs_qualification(&a, &b), needs_qualification(&b, &a));
    }

    #[test]
    fn rendering_is_deterministic(ty in any_type_strategy()) {
        prop_assert_eq!(ty.render_short(), ty.clone().render_short());
        prop_assert!(ty.render_short().len() <= ty.render_qualified().len());
    }
}
