use std::collections::HashMap;

use sentivol_core::SentimentScorer;

/// Scorer returning a preset score per exact text, and `default` otherwise.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
    default: f64,
}

impl FixedScorer {
    /// Empty table scoring everything as `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `text` as `score`.
    #[must_use]
    pub fn with(mut self, text: impl Into<String>, score: f64) -> Self {
        self.scores.insert(text.into(), score);
        self
    }

    /// Score for texts not in the table.
    #[must_use]
    pub const fn with_default(mut self, score: f64) -> Self {
        self.default = score;
        self
    }
}

impl SentimentScorer for FixedScorer {
    fn compound(&self, text: &str) -> f64 {
        self.scores.get(text).copied().unwrap_or(self.default)
    }
}
