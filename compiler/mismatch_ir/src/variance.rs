//! Use-site and declaration-site variance.

use std::fmt;

/// Variance of a type parameter or type argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variance {
    #[default]
    Invariant,
    /// Contravariant (`in`).
    In,
    /// Covariant (`out`).
    Out,
}

impl Variance {
    /// Source keyword for the variance; empty when invariant.
    ///
    /// Prefixes projected type arguments and is shown as-is in variance hints.
    pub fn label(self) -> &'static str {
        match self {
            Variance::Invariant => "",
            Variance::In => "in",
            Variance::Out => "out",
        }
    }

    pub fn is_invariant(self) -> bool {
        self == Variance::Invariant
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests;
