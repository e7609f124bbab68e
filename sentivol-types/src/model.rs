//! Row types flowing through the pipeline stages.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A configured company and the ticker its prices are quoted under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyTicker {
    /// Company name used in news queries and as the merge key.
    pub company: String,
    /// Exchange ticker symbol used for price retrieval.
    pub ticker: String,
}

impl CompanyTicker {
    /// Build a pair from anything string-like.
    pub fn new(company: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ticker: ticker.into(),
        }
    }
}

/// One headline returned by a news provider, tagged with the company whose query returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Company whose query produced the article.
    pub company: String,
    /// Ticker configured for `company`.
    pub ticker: String,
    /// Headline text; providers occasionally omit it.
    pub title: Option<String>,
    /// Publication instant, if the provider supplied a parseable one.
    pub published_at: Option<DateTime<Utc>>,
    /// Publisher display name.
    pub source: Option<String>,
    /// Canonical link to the article.
    pub url: Option<String>,
}

/// An article with its calendar day and compound sentiment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    /// Company whose query produced the article.
    pub company: String,
    /// Ticker configured for `company`.
    pub ticker: String,
    /// Headline text as scored (empty when the provider omitted it).
    pub title: String,
    /// UTC calendar day of publication.
    pub date: NaiveDate,
    /// Compound polarity in `[-1, 1]`.
    pub sentiment_score: f64,
}

/// Mean sentiment of every article for one company on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    /// Company the articles were fetched for.
    pub company: String,
    /// Calendar day of publication.
    pub date: NaiveDate,
    /// Arithmetic mean of the compound scores on that day.
    pub sentiment_score: f64,
}

/// One daily OHLCV bar for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Ticker the bar belongs to.
    pub ticker: String,
    /// Company mapped from `ticker` through the configured pairs, if known.
    pub company: Option<String>,
    /// Exchange-local trading day.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Split/dividend adjusted close, when the provider reports one.
    pub adj_close: Option<f64>,
    /// Traded volume.
    pub volume: Option<u64>,
}

impl PricePoint {
    /// Intraday range normalized by the session low: `(high - low) / low`.
    ///
    /// A zero low is not guarded and yields an infinite or NaN value.
    #[must_use]
    pub fn volatility(&self) -> f64 {
        (self.high - self.low) / self.low
    }
}

/// A sentiment row joined with the volatility of the trading day it maps to.
///
/// Field order matches the CSV column order of the persisted dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    /// Company the sentiment and prices belong to.
    pub company: String,
    /// Calendar day the news was published.
    pub date: NaiveDate,
    /// Mean compound sentiment on `date`.
    pub sentiment_score: f64,
    /// First trading day on or after `date`.
    pub trading_date: NaiveDate,
    /// Volatility on `trading_date`.
    pub volatility_on_trading_date: f64,
}
