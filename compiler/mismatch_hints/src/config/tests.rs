use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_config() {
    let config = HintConfig::default();
    assert_eq!(config.max_overloads(), 4);
    assert_eq!(config.effective_bound(), 4);
    assert_eq!(config.label(0), Some("𝟙"));
    assert_eq!(config.label(3), Some("𝟜"));
    assert_eq!(config.label(4), None);
}

#[test]
fn custom_labels() {
    let Ok(config) = HintConfig::new(6, ["a", "b", "c", "d", "e", "f"]) else {
        panic!("valid config rejected");
    };
    assert_eq!(config.effective_bound(), 6);
    assert_eq!(config.label(5), Some("f"));
}

#[test]
fn bound_limited_by_label_count() {
    let Ok(config) = HintConfig::with_max_overloads(10) else {
        panic!("valid config rejected");
    };
    assert_eq!(config.max_overloads(), 10);
    assert_eq!(config.effective_bound(), DEFAULT_CANDIDATE_LABELS.len());
}

#[test]
fn bound_smaller_than_label_count() {
    let Ok(config) = HintConfig::with_max_overloads(2) else {
        panic!("valid config rejected");
    };
    assert_eq!(config.effective_bound(), 2);
}

#[test]
fn rejects_zero_bound() {
    assert_eq!(
        HintConfig::with_max_overloads(0),
        Err(ConfigError::ZeroOverloadBound)
    );
}

#[test]
fn rejects_empty_labels() {
    assert_eq!(
        HintConfig::new(4, Vec::<String>::new()),
        Err(ConfigError::NoCandidateLabels)
    );
}

#[test]
fn rejects_duplicate_labels() {
    assert_eq!(
        HintConfig::new(4, ["1", "2", "1"]),
        Err(ConfigError::DuplicateCandidateLabel("1".to_string()))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        ConfigError::DuplicateCandidateLabel("x".into()).to_string(),
        "candidate label `x` is used more than once"
    );
}
