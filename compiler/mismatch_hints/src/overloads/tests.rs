use super::*;
use crate::presentation::Anchor;
use pretty_assertions::assert_eq;

fn int() -> Type {
    Type::simple("kotlin.Int")
}

fn string() -> Type {
    Type::simple("kotlin.String")
}

fn argument(id: u32, start: u32, end: u32, ty: Option<Type>) -> ArgumentExpression {
    ArgumentExpression {
        id: ExprId::new(id),
        span: Span::new(start, end),
        declared_type: ty,
    }
}

fn maps(argument: &ArgumentExpression, parameter_type: Type) -> ArgumentMapping {
    ArgumentMapping {
        argument: argument.clone(),
        parameter: ParameterSignature {
            name: format!("p{}", argument.id.raw()),
            ty: parameter_type,
        },
    }
}

fn candidate(name: &str, mapping: Vec<ArgumentMapping>) -> CallCandidate {
    CallCandidate::function(Symbol::new(name), mapping)
}

fn texts(hints: &[Hint]) -> Vec<String> {
    hints.iter().map(Hint::text).collect()
}

#[test]
fn one_accepting_one_rejecting() {
    let arg = argument(0, 6, 8, Some(int()));
    let candidates = vec![
        candidate("greet(String)", vec![maps(&arg, string())]),
        candidate("greet(Int)", vec![maps(&arg, int())]),
    ];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);

    let Some(reports) = analyzer.analyze(&candidates) else {
        panic!("expected reports");
    };
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.argument, &arg);
    assert!(!report.needs_qualification);
    assert_eq!(
        report.verdicts.as_slice(),
        &[
            CandidateVerdict {
                index: 0,
                label: "\u{1D7D9}",
                verdict: Verdict::Rejected {
                    expected: &string()
                },
            },
            CandidateVerdict {
                index: 1,
                label: "\u{1D7DA}",
                verdict: Verdict::Accepted,
            },
        ]
    );

    let hints = analyzer.hints(&candidates);
    assert_eq!(
        texts(&hints),
        vec![": Int", "⟦\u{1D7D9}⟧ ⇏ String", "⟦\u{1D7DA}⟧ ✓"]
    );
    assert!(hints
        .iter()
        .all(|h| h.offset == 8 && h.anchor == Anchor::After));
}

#[test]
fn only_rejected_arguments_reported() {
    let first = argument(0, 4, 5, Some(int()));
    let second = argument(1, 7, 12, Some(string()));
    let candidates = vec![
        candidate("f(Int, Int)", vec![maps(&first, int()), maps(&second, int())]),
        candidate("f(Int, Long)", vec![
            maps(&first, int()),
            maps(&second, Type::simple("kotlin.Long")),
        ]),
    ];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);

    let hints = analyzer.hints(&candidates);
    assert_eq!(
        texts(&hints),
        vec![": String", "⟦\u{1D7D9}⟧ ⇏ Int", "⟦\u{1D7DA}⟧ ⇏ Long"]
    );
    assert!(hints.iter().all(|h| h.offset == 12));
}

#[test]
fn all_accepting_yields_no_hints() {
    let arg = argument(0, 0, 1, Some(int()));
    let candidates = vec![
        candidate("a", vec![maps(&arg, int())]),
        candidate("b", vec![maps(&arg, int())]),
    ];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(analyzer.analyze(&candidates), Some(vec![]));
    assert!(analyzer.hints(&candidates).is_empty());
}

#[test]
fn more_than_four_candidates_suppressed() {
    let arg = argument(0, 0, 1, Some(int()));
    let candidates: Vec<_> = (0..5)
        .map(|i| candidate(&format!("c{i}"), vec![maps(&arg, string())]))
        .collect();
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(analyzer.analyze(&candidates), None);
    assert!(analyzer.hints(&candidates).is_empty());
}

#[test]
fn exactly_four_candidates_explained() {
    let arg = argument(0, 0, 1, Some(int()));
    let candidates: Vec<_> = (0..4)
        .map(|i| candidate(&format!("c{i}"), vec![maps(&arg, string())]))
        .collect();
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(analyzer.hints(&candidates).len(), 5);
}

#[test]
fn optional_parameters_suppress() {
    let arg = argument(0, 0, 1, Some(int()));
    let mut with_defaults = candidate("b", vec![maps(&arg, string())]);
    with_defaults.has_optional_parameters = true;
    let candidates = vec![candidate("a", vec![maps(&arg, string())]), with_defaults];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(analyzer.analyze(&candidates), None);
}

#[test]
fn missing_argument_mapping_suppresses() {
    let arg = argument(0, 0, 1, Some(int()));
    let mut not_a_call = candidate("b", vec![]);
    not_a_call.argument_mapping = None;
    let candidates = vec![candidate("a", vec![maps(&arg, string())]), not_a_call];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(analyzer.analyze(&candidates), None);
}

#[test]
fn no_candidates_suppressed() {
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(analyzer.analyze(&[]), None);
}

#[test]
fn only_best_ranked_candidates_count() {
    let arg = argument(0, 0, 1, Some(int()));
    let mut worse = candidate("worse", vec![maps(&arg, Type::simple("kotlin.Long"))]);
    worse.is_best_ranked = false;
    worse.has_optional_parameters = true;
    let candidates = vec![
        candidate("a", vec![maps(&arg, string())]),
        worse,
        candidate("b", vec![maps(&arg, int())]),
    ];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(
        texts(&analyzer.hints(&candidates)),
        vec![": Int", "⟦\u{1D7D9}⟧ ⇏ String", "⟦\u{1D7DA}⟧ ✓"]
    );
}

#[test]
fn candidate_without_mapping_for_argument_is_skipped() {
    let first = argument(0, 0, 1, Some(int()));
    let second = argument(1, 3, 4, Some(int()));
    let candidates = vec![
        candidate("two", vec![maps(&first, string()), maps(&second, int())]),
        candidate("one", vec![maps(&first, int())]),
    ];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);

    let Some(reports) = analyzer.analyze(&candidates) else {
        panic!("expected reports");
    };
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].argument.id, ExprId::new(0));
    assert_eq!(reports[0].verdicts.len(), 2);
}

#[test]
fn unknown_argument_type_renders_placeholder() {
    let arg = argument(0, 0, 1, None);
    let candidates = vec![
        candidate("a", vec![maps(&arg, string())]),
        candidate("b", vec![maps(&arg, int())]),
    ];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(
        texts(&analyzer.hints(&candidates)),
        vec![": ??", "⟦\u{1D7D9}⟧ ⇏ String", "⟦\u{1D7DA}⟧ ⇏ Int"]
    );
}

#[test]
fn same_short_name_renders_qualified() {
    let arg = argument(0, 0, 1, Some(Type::simple("java.util.List")));
    let candidates = vec![
        candidate("a", vec![maps(&arg, Type::simple("kotlin.collections.List"))]),
        candidate("b", vec![maps(&arg, string())]),
    ];
    let config = HintConfig::default();
    let analyzer = OverloadAnalyzer::new(&config);
    assert_eq!(
        texts(&analyzer.hints(&candidates)),
        vec![
            ": java.util.List",
            "⟦\u{1D7D9}⟧ ⇏ kotlin.collections.List",
            "⟦\u{1D7DA}⟧ ⇏ kotlin.String",
        ]
    );
}

#[test]
fn bound_follows_config() {
    let arg = argument(0, 0, 1, Some(int()));
    let candidates = vec![
        candidate("a", vec![maps(&arg, string())]),
        candidate("b", vec![maps(&arg, string())]),
    ];

    let Ok(narrow) = HintConfig::with_max_overloads(1) else {
        panic!("valid config");
    };
    assert_eq!(OverloadAnalyzer::new(&narrow).analyze(&candidates), None);

    let Ok(few_labels) = HintConfig::new(8, ["a"]) else {
        panic!("valid config");
    };
    assert_eq!(OverloadAnalyzer::new(&few_labels).analyze(&candidates), None);

    let Ok(custom) = HintConfig::new(8, ["a", "b"]) else {
        panic!("valid config");
    };
    assert_eq!(
        texts(&OverloadAnalyzer::new(&custom).hints(&candidates)),
        vec![": Int", "⟦a⟧ ⇏ String", "⟦b⟧ ⇏ String"]
    );
}
