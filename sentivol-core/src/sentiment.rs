use std::collections::BTreeMap;

use chrono::NaiveDate;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::{DailySentiment, NewsArticle, ScoredArticle};

/// Maps a piece of text to a compound polarity score in `[-1, 1]`.
///
/// Implementations must be stateless per call: scoring the same text twice
/// yields the same value regardless of what was scored in between.
pub trait SentimentScorer: Send + Sync {
    /// Compound polarity of `text`.
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon and rule based scorer backed by the VADER analyzer.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Load the bundled lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }
}

/// Score every article title and attach its UTC publication day.
///
/// Articles without a publication time cannot be grouped and are dropped.
/// Missing titles are scored as empty text.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "sentivol::core::sentiment", skip(scorer, articles), fields(articles = articles.len()))
)]
pub fn score_articles(scorer: &dyn SentimentScorer, articles: &[NewsArticle]) -> Vec<ScoredArticle> {
    articles
        .iter()
        .filter_map(|a| {
            let Some(published) = a.published_at else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "sentivol::core::sentiment",
                    company = %a.company,
                    title = ?a.title,
                    "dropping article without publication time"
                );
                return None;
            };
            let title = a.title.clone().unwrap_or_default();
            let sentiment_score = scorer.compound(&title);
            Some(ScoredArticle {
                company: a.company.clone(),
                ticker: a.ticker.clone(),
                title,
                date: published.date_naive(),
                sentiment_score,
            })
        })
        .collect()
}

/// Average scores per (company, day); output is ordered by company then day.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate_daily(scored: &[ScoredArticle]) -> Vec<DailySentiment> {
    let mut groups: BTreeMap<(&str, NaiveDate), (f64, usize)> = BTreeMap::new();
    for s in scored {
        let acc = groups.entry((s.company.as_str(), s.date)).or_insert((0.0, 0));
        acc.0 += s.sentiment_score;
        acc.1 += 1;
    }
    groups
        .into_iter()
        .map(|((company, date), (sum, n))| DailySentiment {
            company: company.to_string(),
            date,
            sentiment_score: sum / n as f64,
        })
        .collect()
}
