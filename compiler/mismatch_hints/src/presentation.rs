//! Positioned, styled hint text handed back to the host.
//!
//! A [`Hint`] is an anchor offset, a side (before or after the anchor) and
//! an ordered list of [`Segment`]s. Segments that name a class carry a
//! [`NavigationTarget`] so an interactive host can offer "jump to definition".

use mismatch_ir::ClassId;
use mismatch_types::{format_type_into, Type, TypeWriter};

/// Which side of the diagnostic's ranges a hint attaches to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// Immediately before the first range's start.
    Before,
    /// Immediately after the last range's end.
    After,
}

/// Where a clickable segment leads.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationTarget {
    /// Fully qualified name of the class to navigate to.
    pub fq_name: String,
}

/// A run of hint text, optionally clickable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub text: String,
    pub navigation: Option<NavigationTarget>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            navigation: None,
        }
    }

    pub fn navigable(text: impl Into<String>, target: NavigationTarget) -> Self {
        Segment {
            text: text.into(),
            navigation: Some(target),
        }
    }
}

/// One inline annotation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hint {
    pub offset: u32,
    pub anchor: Anchor,
    pub segments: Vec<Segment>,
}

impl Hint {
    pub fn before(offset: u32, segments: Vec<Segment>) -> Self {
        Hint {
            offset,
            anchor: Anchor::Before,
            segments,
        }
    }

    pub fn after(offset: u32, segments: Vec<Segment>) -> Self {
        Hint {
            offset,
            anchor: Anchor::After,
            segments,
        }
    }

    /// All segment texts concatenated.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Receives hints as they are produced.
pub trait HintSink {
    fn add_hint(&mut self, hint: Hint);
}

impl HintSink for Vec<Hint> {
    fn add_hint(&mut self, hint: Hint) {
        self.push(hint);
    }
}

/// Accumulates segments for one hint.
///
/// Consecutive plain-text pieces are merged into a single segment.
#[derive(Default, Debug)]
pub struct PresentationBuilder {
    segments: Vec<Segment>,
}

impl PresentationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append plain text.
    pub fn text(&mut self, text: &str) {
        self.append_text(text);
    }

    /// Append clickable text.
    pub fn navigable(&mut self, text: &str, target: NavigationTarget) {
        self.segments.push(Segment::navigable(text, target));
    }

    /// Append a rendered type; class names become navigable.
    pub fn ty(&mut self, ty: &Type, qualified: bool) {
        format_type_into(ty, qualified, self);
    }

    pub fn finish(self) -> Vec<Segment> {
        self.segments
    }

    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.navigation.is_none() => last.text.push_str(text),
            _ => self.segments.push(Segment::plain(text)),
        }
    }
}

impl TypeWriter for PresentationBuilder {
    fn text(&mut self, text: &str) {
        self.append_text(text);
    }

    fn class_name(&mut self, class_id: &ClassId, rendered: &str) {
        self.navigable(
            rendered,
            NavigationTarget {
                fq_name: class_id.fq_name(),
            },
        );
    }
}
