//! Report envelopes produced by the pipeline stages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SentivolError;
use crate::model::{NewsArticle, PricePoint};
use crate::request::DateWindow;

/// Outcome of the news query for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyFetch {
    /// Company the query was issued for.
    pub company: String,
    /// Ticker configured for the company.
    pub ticker: String,
    /// Number of articles the company contributed.
    pub articles: usize,
    /// Failure that made the company contribute nothing, if any.
    pub error: Option<SentivolError>,
}

impl CompanyFetch {
    /// Whether the provider call for this company succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Articles collected across every company plus the per-company outcomes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsReport {
    /// Every article fetched, tagged with its company.
    pub articles: Vec<NewsArticle>,
    /// One entry per configured company, in configuration order.
    pub outcomes: Vec<CompanyFetch>,
}

impl NewsReport {
    /// Companies whose provider call failed.
    pub fn failures(&self) -> impl Iterator<Item = &CompanyFetch> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }
}

/// Daily bars for all requested tickers plus per-ticker warnings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceReport {
    /// One row per (ticker, date).
    pub points: Vec<PricePoint>,
    /// Non-fatal issues, e.g. a ticker the provider could not serve.
    pub warnings: Vec<SentivolError>,
}

/// Result of the correlation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Correlation {
    /// Too few merged rows for a meaningful coefficient.
    Skipped {
        /// Number of merged rows available.
        rows: usize,
    },
    /// Pearson coefficient between sentiment and volatility.
    Computed(f64),
}

impl Correlation {
    /// The coefficient, when one was computed.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Computed(r) => Some(r),
            Self::Skipped { .. } => None,
        }
    }
}

/// Summary of one complete pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Analysis window the run covered.
    pub window: DateWindow,
    /// Per-company news outcomes.
    pub news: Vec<CompanyFetch>,
    /// Total articles fetched.
    pub articles: usize,
    /// Distinct (company, date) sentiment rows.
    pub daily_sentiment_rows: usize,
    /// Daily price rows across every ticker.
    pub price_rows: usize,
    /// Distinct trading days found in the price rows.
    pub trading_days: usize,
    /// Rows surviving the inner join.
    pub merged_rows: usize,
    /// Correlation outcome; `None` when the merge produced no rows.
    pub correlation: Option<Correlation>,
    /// Path of the persisted merged dataset, if written.
    pub csv_path: Option<PathBuf>,
    /// Path of the rendered plot, if written.
    pub plot_path: Option<PathBuf>,
    /// Recoverable issues encountered along the way.
    pub warnings: Vec<SentivolError>,
}
