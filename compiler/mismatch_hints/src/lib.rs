//! Inline explanations for type-mismatch diagnostics.
//!
//! The host compiler reports diagnostics; this crate turns the ones about
//! disagreeing types into short annotations placed next to the offending
//! source range.
//!
//! # Pipeline
//!
//! ```text
//! RawDiagnostic ──adapter──▶ DiagnosticKind ──classify──▶ Problem
//!                                                          │
//!                     NoneApplicable ◀─────────────────────┤
//!                           │                              │
//!                   OverloadAnalyzer                 problem_hint
//!                           └──────────────▶ Hint ◀────────┘
//! ```
//!
//! - `diagnostic`: raw diagnostics and the static adapter table
//! - `problem`: the closed six-variant problem taxonomy
//! - `render`: one hint per problem
//! - `overloads`: per-argument breakdown for "none applicable" calls
//! - `collector`: drives the above for one source element
//!
//! Nothing here fails. Diagnostics that cannot be explained produce no hint.

mod collector;
mod config;
mod diagnostic;
mod overloads;
mod presentation;
mod problem;
mod render;

pub use collector::{AnalysisSession, MismatchCollector};
pub use config::{ConfigError, HintConfig, DEFAULT_CANDIDATE_LABELS, NONE_APPLICABLE_MAX_OVERLOADS};
pub use diagnostic::{
    Adapter, CheckerFilter, DiagnosticKind, DiagnosticPayload, RawDiagnostic, DIAGNOSTIC_ADAPTERS,
};
pub use overloads::{
    ArgumentExpression, ArgumentMapping, ArgumentReport, CallCandidate, CandidateVerdict,
    OverloadAnalyzer, ParameterSignature, Verdict,
};
pub use presentation::{Anchor, Hint, HintSink, NavigationTarget, PresentationBuilder, Segment};
pub use problem::{classify, BuiltinTypes, Problem};
pub use render::{choose_better_actual_type, problem_hint, DOES_NOT_CONFORM, NOT_EQUAL};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=mismatch_hints=debug` or `RUST_LOG=mismatch_hints=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
