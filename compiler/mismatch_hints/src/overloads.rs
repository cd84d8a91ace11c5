//! Per-argument breakdown for calls where no overload applies.
//!
//! When every best-ranked overload rejects the call, the plain diagnostic
//! says little. The analyzer lines the candidates up against each argument
//! and shows which ones accept it:
//!
//! ```text
//! greet(42)
//!         : Int  ⟦𝟙⟧ ⇏ String  ⟦𝟚⟧ ✓
//! ```
//!
//! Anything that cannot be explained with such a table (too many candidates,
//! optional parameters, calls without a structured argument mapping) is
//! suppressed as a whole.

use mismatch_ir::{ExprId, Span, Symbol};
use mismatch_types::{NameMatch, Type, UNRESOLVED};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::config::HintConfig;
use crate::presentation::{Hint, PresentationBuilder};
use crate::render::DOES_NOT_CONFORM;

/// An argument expression at a call site.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ArgumentExpression {
    pub id: ExprId,
    pub span: Span,
    /// The expression's own statically declared type, if known.
    pub declared_type: Option<Type>,
}

/// A declared parameter of one overload.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParameterSignature {
    pub name: String,
    pub ty: Type,
}

/// One argument bound to one parameter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ArgumentMapping {
    pub argument: ArgumentExpression,
    pub parameter: ParameterSignature,
}

/// One overload the resolver considered for a call.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CallCandidate {
    pub symbol: Symbol,
    /// Tied for the best resolution score.
    pub is_best_ranked: bool,
    /// Has at least one default-valued parameter.
    pub has_optional_parameters: bool,
    /// `None` when the candidate is not a structured function call.
    pub argument_mapping: Option<Vec<ArgumentMapping>>,
}

impl CallCandidate {
    /// A best-ranked function call without optional parameters.
    pub fn function(symbol: Symbol, argument_mapping: Vec<ArgumentMapping>) -> Self {
        CallCandidate {
            symbol,
            is_best_ranked: true,
            has_optional_parameters: false,
            argument_mapping: Some(argument_mapping),
        }
    }

    fn explainable_mapping(&self) -> Option<&[ArgumentMapping]> {
        if self.has_optional_parameters {
            return None;
        }
        self.argument_mapping.as_deref()
    }
}

/// How one candidate judges one argument.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Verdict<'a> {
    Accepted,
    Rejected { expected: &'a Type },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CandidateVerdict<'a> {
    /// Position among the explained candidates.
    pub index: usize,
    pub label: &'a str,
    pub verdict: Verdict<'a>,
}

/// The breakdown for one argument that at least one candidate rejects.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ArgumentReport<'a> {
    pub argument: &'a ArgumentExpression,
    /// Some rejection compares types that only differ in their package.
    pub needs_qualification: bool,
    pub verdicts: SmallVec<[CandidateVerdict<'a>; 4]>,
}

/// Explains "none applicable" calls argument by argument.
#[derive(Copy, Clone, Debug)]
pub struct OverloadAnalyzer<'c> {
    config: &'c HintConfig,
}

impl<'c> OverloadAnalyzer<'c> {
    pub fn new(config: &'c HintConfig) -> Self {
        OverloadAnalyzer { config }
    }

    /// Build the per-argument reports for a call.
    ///
    /// Returns `None` when the call cannot be explained cleanly: no
    /// explainable candidate, more candidates than there are labels or than
    /// the configured bound, or some best-ranked candidate had to be
    /// discarded. Arguments every candidate accepts produce no report.
    pub fn analyze<'a>(&'a self, candidates: &'a [CallCandidate]) -> Option<Vec<ArgumentReport<'a>>> {
        let best_count = candidates.iter().filter(|c| c.is_best_ranked).count();
        let explainable: SmallVec<[&[ArgumentMapping]; 4]> = candidates
            .iter()
            .filter(|c| c.is_best_ranked)
            .filter_map(CallCandidate::explainable_mapping)
            .collect();

        if explainable.is_empty() {
            debug!(best_count, "no explainable overload candidates");
            return None;
        }
        if explainable.len() > self.config.effective_bound() {
            debug!(
                count = explainable.len(),
                bound = self.config.effective_bound(),
                "too many overload candidates to explain"
            );
            return None;
        }
        if explainable.len() < best_count {
            debug!(
                best_count,
                explainable = explainable.len(),
                "best-ranked candidates were discarded"
            );
            return None;
        }

        let labels: SmallVec<[&str; 4]> = (0..explainable.len())
            .map(|index| self.config.label(index))
            .collect::<Option<_>>()?;
        let lookups: SmallVec<[FxHashMap<ExprId, &ParameterSignature>; 4]> = explainable
            .iter()
            .map(|mapping| {
                mapping
                    .iter()
                    .map(|m| (m.argument.id, &m.parameter))
                    .collect()
            })
            .collect();

        let reports = explainable[0]
            .iter()
            .filter_map(|mapping| report_for(&mapping.argument, &labels, &lookups))
            .collect();
        Some(reports)
    }

    /// Render the breakdown as hints.
    ///
    /// Each reported argument gets its own type after its end offset,
    /// followed by one hint per candidate at the same offset.
    pub fn hints(&self, candidates: &[CallCandidate]) -> Vec<Hint> {
        let Some(reports) = self.analyze(candidates) else {
            return Vec::new();
        };

        let mut hints = Vec::new();
        for report in &reports {
            let offset = report.argument.span.end;
            let qualified = report.needs_qualification;

            let mut b = PresentationBuilder::new();
            b.text(": ");
            match &report.argument.declared_type {
                Some(ty) => b.ty(ty, qualified),
                None => b.text(UNRESOLVED),
            }
            hints.push(Hint::after(offset, b.finish()));

            for verdict in &report.verdicts {
                let mut b = PresentationBuilder::new();
                b.text("⟦");
                b.text(verdict.label);
                b.text("⟧");
                match verdict.verdict {
                    Verdict::Accepted => b.text(" ✓"),
                    Verdict::Rejected { expected } => {
                        b.text(DOES_NOT_CONFORM);
                        b.ty(expected, qualified);
                    }
                }
                hints.push(Hint::after(offset, b.finish()));
            }
        }
        hints
    }
}

/// Judge one argument against every candidate that maps it.
///
/// `None` when no candidate rejects the argument.
fn report_for<'a>(
    argument: &'a ArgumentExpression,
    labels: &[&'a str],
    lookups: &[FxHashMap<ExprId, &'a ParameterSignature>],
) -> Option<ArgumentReport<'a>> {
    let (actual_short, actual_qualified) = match &argument.declared_type {
        Some(ty) => (ty.render_short(), ty.render_qualified()),
        None => (UNRESOLVED.to_owned(), UNRESOLVED.to_owned()),
    };

    let mut verdicts = SmallVec::new();
    let mut needs_qualification = false;
    let mut any_rejected = false;
    for (index, (lookup, &label)) in lookups.iter().zip(labels).enumerate() {
        let Some(&parameter) = lookup.get(&argument.id) else {
            continue;
        };
        let expected = &parameter.ty;
        let name_match = NameMatch::from_renderings(
            (&actual_short, &actual_qualified),
            (&expected.render_short(), &expected.render_qualified()),
        );
        let verdict = if name_match == NameMatch::Exact {
            Verdict::Accepted
        } else {
            any_rejected = true;
            needs_qualification |= name_match.needs_qualification();
            Verdict::Rejected { expected }
        };
        verdicts.push(CandidateVerdict {
            index,
            label,
            verdict,
        });
    }

    any_rejected.then_some(ArgumentReport {
        argument,
        needs_qualification,
        verdicts,
    })
}

#[cfg(test)]
mod tests;
