//! Type rendering for hints.
//!
//! One walk over the type drives any [`TypeWriter`]: a plain `String` for
//! comparisons and tests, or a presentation builder that attaches navigation
//! targets to class names.

use mismatch_ir::ClassId;

use crate::{Type, TypeKind, TypeProjection};

/// Placeholder for anything without a resolvable name.
pub const UNRESOLVED: &str = "??";

/// Destination for rendered type text.
pub trait TypeWriter {
    /// Append plain text.
    fn text(&mut self, text: &str);

    /// Append the rendered name of a class.
    ///
    /// Writers that support navigation attach `class_id` to the text.
    fn class_name(&mut self, class_id: &ClassId, rendered: &str) {
        let _ = class_id;
        self.text(rendered);
    }
}

impl TypeWriter for String {
    fn text(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Render `ty` into `out`, using fully qualified class names when `qualified`.
pub fn format_type_into<W: TypeWriter + ?Sized>(ty: &Type, qualified: bool, out: &mut W) {
    match ty.kind() {
        TypeKind::Function {
            receiver,
            parameters,
            return_type,
        } => {
            if let Some(receiver) = receiver {
                format_type_into(receiver, qualified, out);
                out.text(".");
            }
            out.text("(");
            write_separated(parameters, ", ", out, |param, out| {
                format_type_into(param, qualified, out);
            });
            out.text(if parameters.is_empty() { "-> " } else { " -> " });
            format_type_into(return_type, qualified, out);
            out.text(")");
        }
        TypeKind::Class {
            class_id,
            arguments,
        } => {
            match class_id {
                Some(id) => out.class_name(id, &id.render(qualified)),
                None => out.text(UNRESOLVED),
            }
            if !arguments.is_empty() {
                out.text("<");
                write_separated(arguments, ", ", out, |arg, out| {
                    format_projection_into(arg, qualified, out);
                });
                out.text(">");
            }
        }
        TypeKind::DefinitelyNotNull { original } => {
            format_type_into(original, qualified, out);
            out.text(" & Any");
        }
        TypeKind::Intersection { conjuncts } => {
            write_separated(conjuncts, " & ", out, |conjunct, out| {
                format_type_into(conjunct, qualified, out);
            });
        }
        TypeKind::Flexible { lower, upper } => {
            format_type_into(lower, qualified, out);
            out.text(" .. ");
            format_type_into(upper, qualified, out);
        }
        TypeKind::Captured { projection } => format_projection_into(projection, qualified, out),
        TypeKind::TypeParameter { name } => out.text(name),
        TypeKind::Error => out.text(UNRESOLVED),
    }
    if ty.is_nullable() {
        out.text("?");
    }
}

fn format_projection_into<W: TypeWriter + ?Sized>(
    projection: &TypeProjection,
    qualified: bool,
    out: &mut W,
) {
    match projection {
        TypeProjection::Star => out.text("*"),
        TypeProjection::Argument { variance, ty } => {
            if !variance.is_invariant() {
                out.text(variance.label());
                out.text(" ");
            }
            format_type_into(ty, qualified, out);
        }
    }
}

fn write_separated<T, W: TypeWriter + ?Sized>(
    items: &[T],
    separator: &str,
    out: &mut W,
    mut write_item: impl FnMut(&T, &mut W),
) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.text(separator);
        }
        write_item(item, out);
    }
}

impl Type {
    /// Render as a string with short or fully qualified class names.
    pub fn render(&self, qualified: bool) -> String {
        let mut buf = String::new();
        format_type_into(self, qualified, &mut buf);
        buf
    }

    pub fn render_short(&self) -> String {
        self.render(false)
    }

    pub fn render_qualified(&self) -> String {
        self.render(true)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_short())
    }
}
