//! Opaque handles supplied by the host compiler.

use std::fmt;

/// A callable or class symbol referenced by a diagnostic.
///
/// Only carried through classification; never inspected.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    pub name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol { name: name.into() }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Identity of an argument expression within one call.
///
/// Overload candidates for the same call share argument expressions; the id
/// is how one candidate's mapping is matched against another's.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ExprId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::ExprId;
    crate::static_assert_size!(ExprId, 4);
}
