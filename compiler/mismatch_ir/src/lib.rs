//! Mismatch IR - shared vocabulary for the type-mismatch hint pipeline.
//!
//! This crate contains the small value types every other crate speaks:
//! - Spans (half-open text ranges) and the anchor points derived from them
//! - Class identities (package + relative name)
//! - Use-site variance
//! - Opaque symbol and expression handles supplied by the host compiler
//!
//! Everything here is an immutable value: `Clone`, `Eq`, `Hash`, `Debug`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod class_id;
mod span;
mod symbol;
mod variance;

pub use class_id::ClassId;
pub use span::{anchor_after, anchor_before, Span};
pub use symbol::{ExprId, Symbol};
pub use variance::Variance;
