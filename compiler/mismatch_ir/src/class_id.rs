//! Nominal class identity.

use std::fmt;

/// Identity of a named class: its package plus its name relative to that package.
///
/// The relative name keeps nesting (`Map.Entry`), so the short rendering of a
/// nested class still shows its outer class.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassId {
    package: String,
    relative_name: String,
}

impl ClassId {
    /// Create a class id from an explicit package and relative name.
    pub fn new(package: impl Into<String>, relative_name: impl Into<String>) -> Self {
        ClassId {
            package: package.into(),
            relative_name: relative_name.into(),
        }
    }

    /// Split a fully qualified name into package and relative name.
    ///
    /// The package ends before the first segment that starts with an uppercase
    /// letter (`a.b.Outer.Inner` is `a.b` + `Outer.Inner`). Without such a
    /// segment the last segment is the class name.
    pub fn parse(fq_name: &str) -> Self {
        let segments: Vec<&str> = fq_name.split('.').collect();
        let split = segments
            .iter()
            .position(|segment| segment.starts_with(|c: char| c.is_uppercase()))
            .unwrap_or(segments.len().saturating_sub(1));
        ClassId {
            package: segments[..split].join("."),
            relative_name: segments[split..].join("."),
        }
    }

    /// The package, empty for the root package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The name relative to the package, used for short rendering.
    pub fn short_name(&self) -> &str {
        &self.relative_name
    }

    /// The fully qualified name.
    pub fn fq_name(&self) -> String {
        if self.package.is_empty() {
            self.relative_name.clone()
        } else {
            format!("{}.{}", self.package, self.relative_name)
        }
    }

    /// Render either the short or the fully qualified name.
    pub fn render(&self, qualified: bool) -> String {
        if qualified {
            self.fq_name()
        } else {
            self.relative_name.clone()
        }
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.fq_name())
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fq_name())
    }
}
