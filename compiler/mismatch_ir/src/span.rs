//! Source location spans.
//!
//! A diagnostic carries one or more spans; hints anchor either before the
//! first span's start or after the last span's end.

use std::fmt;

/// Half-open text range `[start, end)`.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Offset immediately before a diagnostic's ranges: the first range's start.
#[inline]
pub fn anchor_before(ranges: &[Span]) -> Option<u32> {
    ranges.first().map(|span| span.start)
}

/// Offset immediately after a diagnostic's ranges: the last range's end.
#[inline]
pub fn anchor_after(ranges: &[Span]) -> Option<u32> {
    ranges.last().map(|span| span.end)
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
