//! Short vs. fully qualified rendering.
//!
//! Short names are preferred. Two types that are different but share a
//! short rendering (`kotlin.collections.List` vs `java.util.List`) would read
//! as `List ⇏ List`, so such pairs switch to fully qualified names.

use crate::Type;

/// How the renderings of two types relate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NameMatch {
    /// Fully qualified renderings are equal.
    Exact,
    /// Only the short renderings are equal.
    ShortOnly,
    /// Even the short renderings differ.
    Different,
}

impl NameMatch {
    pub fn of(a: &Type, b: &Type) -> Self {
        Self::from_renderings(
            (&a.render_short(), &a.render_qualified()),
            (&b.render_short(), &b.render_qualified()),
        )
    }

    /// Compare already rendered `(short, qualified)` pairs.
    ///
    /// Lets callers compare against placeholders such as `??` for types
    /// that are unknown.
    pub fn from_renderings(a: (&str, &str), b: (&str, &str)) -> Self {
        if a.1 == b.1 {
            NameMatch::Exact
        } else if a.0 == b.0 {
            NameMatch::ShortOnly
        } else {
            NameMatch::Different
        }
    }

    /// The two types must be shown fully qualified to be told apart.
    pub fn needs_qualification(self) -> bool {
        self == NameMatch::ShortOnly
    }
}

/// Whether a pair of jointly displayed types must be rendered fully qualified.
pub fn needs_qualification(a: &Type, b: &Type) -> bool {
    NameMatch::of(a, b).needs_qualification()
}

/// Per-type qualification for a jointly displayed list.
///
/// Entry `i` is true when some other entry shares its short rendering but
/// not its qualified one.
pub fn qualification_flags(types: &[Type]) -> Vec<bool> {
    let rendered: Vec<(String, String)> = types
        .iter()
        .map(|ty| (ty.render_short(), ty.render_qualified()))
        .collect();

    rendered
        .iter()
        .enumerate()
        .map(|(i, (short, qualified))| {
            rendered
                .iter()
                .enumerate()
                .any(|(j, (other_short, other_qualified))| {
                    i != j && short == other_short && qualified != other_qualified
                })
        })
        .collect()
}

#[cfg(test)]
mod tests;
