//! Diagnostic scan driver.
//!
//! The only code that talks to the host's analysis session. It fetches a
//! source element's diagnostics, classifies them and hands each problem to
//! the renderer or the overload analyzer.

use mismatch_types::Type;
use tracing::{debug, trace};

use crate::config::HintConfig;
use crate::diagnostic::{CheckerFilter, RawDiagnostic};
use crate::overloads::{CallCandidate, OverloadAnalyzer};
use crate::presentation::{Hint, HintSink};
use crate::problem::{classify, BuiltinTypes, Problem};
use crate::render::problem_hint;

/// The host compiler's analysis of one source file.
///
/// Implementations answer queries about source elements. The collector
/// never caches answers, so the session decides what is computed when.
pub trait AnalysisSession {
    /// A node of the host's syntax tree.
    type Element;

    /// Diagnostics reported on `element` by the given checker set.
    fn diagnostics(&self, element: &Self::Element, filter: CheckerFilter) -> Vec<RawDiagnostic>;

    /// Overload candidates considered for the call at `element`.
    ///
    /// Empty when `element` is not a call.
    fn call_candidates(&self, element: &Self::Element) -> Vec<CallCandidate>;

    /// The statically declared type of `element`, if it is an expression.
    fn expression_type(&self, element: &Self::Element) -> Option<Type>;

    fn builtins(&self) -> &BuiltinTypes;
}

/// Collects mismatch hints for source elements.
pub struct MismatchCollector<'s, S: AnalysisSession> {
    session: &'s S,
    config: HintConfig,
}

impl<'s, S: AnalysisSession> MismatchCollector<'s, S> {
    pub fn new(session: &'s S, config: HintConfig) -> Self {
        MismatchCollector { session, config }
    }

    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    /// Add the hints for every explainable diagnostic on `element` to `sink`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn collect_from_element(&self, element: &S::Element, sink: &mut impl HintSink) {
        let diagnostics = self
            .session
            .diagnostics(element, CheckerFilter::OnlyCommonCheckers);
        debug!(count = diagnostics.len(), "diagnostics");

        for diagnostic in &diagnostics {
            if diagnostic.ranges.is_empty() {
                trace!(factory = %diagnostic.factory_name, "diagnostic without ranges");
                continue;
            }
            let Some(problem) = classify(diagnostic, self.session.builtins()) else {
                continue;
            };

            if let Problem::NoneApplicable { .. } = problem {
                let candidates = self.session.call_candidates(element);
                let analyzer = OverloadAnalyzer::new(&self.config);
                for hint in analyzer.hints(&candidates) {
                    sink.add_hint(hint);
                }
                continue;
            }

            let hint = problem_hint(&problem, &diagnostic.ranges, || {
                self.session.expression_type(element)
            });
            if let Some(hint) = hint {
                sink.add_hint(hint);
            }
        }
    }

    /// The hints for `element`, in diagnostic order.
    pub fn collect(&self, element: &S::Element) -> Vec<Hint> {
        let mut hints = Vec::new();
        self.collect_from_element(element, &mut hints);
        hints
    }
}
