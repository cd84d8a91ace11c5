//! Type model for mismatch hints.
//!
//! Types arrive from the host compiler already computed; this crate only
//! needs to look at their shape:
//! - `Type`/`TypeKind`: one closed variant per structural shape
//! - `format`: short and fully qualified rendering through a `TypeWriter`
//! - `instantiation`: "is this a generic instantiation of that"
//! - `qualify`: when two types would print identically under short names
//!
//! Nothing here re-derives type compatibility. Diagnostics decide what is
//! wrong; these helpers only decide how to show it.

mod format;
mod instantiation;
mod qualify;
mod ty;

pub use format::{format_type_into, TypeWriter, UNRESOLVED};
pub use instantiation::is_instantiation_of;
pub use qualify::{needs_qualification, qualification_flags, NameMatch};
pub use ty::{Type, TypeKind, TypeProjection};
