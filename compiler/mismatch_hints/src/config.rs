//! Hint configuration.

/// Largest number of overload candidates the per-argument breakdown explains.
pub const NONE_APPLICABLE_MAX_OVERLOADS: usize = 4;

/// Default candidate labels: mathematical double-struck digits one to four.
pub const DEFAULT_CANDIDATE_LABELS: [&str; 4] = ["\u{1D7D9}", "\u{1D7DA}", "\u{1D7DB}", "\u{1D7DC}"];

/// Invalid hint configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one candidate label is required")]
    NoCandidateLabels,
    #[error("candidate label `{0}` is used more than once")]
    DuplicateCandidateLabel(String),
    #[error("the overload bound must be at least 1")]
    ZeroOverloadBound,
}

/// Configuration for hint rendering.
///
/// Candidates in an overload breakdown are told apart by label, so the
/// number of explainable candidates is bounded by both `max_overloads` and
/// the number of labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintConfig {
    max_overloads: usize,
    candidate_labels: Vec<String>,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            max_overloads: NONE_APPLICABLE_MAX_OVERLOADS,
            candidate_labels: DEFAULT_CANDIDATE_LABELS.iter().map(|&l| l.to_owned()).collect(),
        }
    }
}

impl HintConfig {
    /// Create a validated config.
    pub fn new<I, L>(max_overloads: usize, candidate_labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        if max_overloads == 0 {
            return Err(ConfigError::ZeroOverloadBound);
        }
        let mut labels: Vec<String> = Vec::new();
        for label in candidate_labels {
            let label = label.into();
            if labels.contains(&label) {
                return Err(ConfigError::DuplicateCandidateLabel(label));
            }
            labels.push(label);
        }
        if labels.is_empty() {
            return Err(ConfigError::NoCandidateLabels);
        }
        Ok(Self {
            max_overloads,
            candidate_labels: labels,
        })
    }

    /// Default labels with a different overload bound.
    pub fn with_max_overloads(max_overloads: usize) -> Result<Self, ConfigError> {
        Self::new(max_overloads, DEFAULT_CANDIDATE_LABELS)
    }

    #[inline]
    pub fn max_overloads(&self) -> usize {
        self.max_overloads
    }

    #[inline]
    pub fn candidate_labels(&self) -> &[String] {
        &self.candidate_labels
    }

    /// Number of candidates that can actually be explained.
    #[inline]
    pub fn effective_bound(&self) -> usize {
        self.max_overloads.min(self.candidate_labels.len())
    }

    /// Label for the candidate at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.candidate_labels.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests;
