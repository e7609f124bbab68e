//! Request envelopes passed to connectors and the analysis window they derive from.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SentivolError;

/// Inclusive range of calendar days under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateWindow {
    /// Build a window, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the window is inverted.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SentivolError> {
        if start > end {
            return Err(SentivolError::InvalidArg(format!(
                "window start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window ending `offset_days` before `today` and starting `length_days` before that end.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the arithmetic leaves the supported date range.
    pub fn ending_days_ago(
        today: NaiveDate,
        offset_days: u64,
        length_days: u64,
    ) -> Result<Self, SentivolError> {
        let end = today
            .checked_sub_days(Days::new(offset_days))
            .ok_or_else(|| SentivolError::InvalidArg(format!("offset of {offset_days} days")))?;
        let start = end
            .checked_sub_days(Days::new(length_days))
            .ok_or_else(|| SentivolError::InvalidArg(format!("window of {length_days} days")))?;
        Ok(Self { start, end })
    }

    /// Widen the window by `before` days at the start and `after` days at the end.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the arithmetic leaves the supported date range.
    pub fn padded(self, before: u64, after: u64) -> Result<Self, SentivolError> {
        let start = self
            .start
            .checked_sub_days(Days::new(before))
            .ok_or_else(|| SentivolError::InvalidArg(format!("padding of {before} days")))?;
        let end = self
            .end
            .checked_add_days(Days::new(after))
            .ok_or_else(|| SentivolError::InvalidArg(format!("padding of {after} days")))?;
        Ok(Self { start, end })
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parameters for one news search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRequest {
    /// Provider query string.
    pub query: String,
    /// First publication day (inclusive).
    pub from: NaiveDate,
    /// Last publication day (inclusive).
    pub to: NaiveDate,
    /// ISO-639-1 language filter.
    pub language: String,
    /// Provider sort key, e.g. `publishedAt` for most-recent-first.
    pub sort_by: String,
    /// Maximum number of articles to return.
    pub page_size: u32,
}

/// Parameters for one batched daily price fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    /// Tickers to fetch, in configuration order.
    pub tickers: Vec<String>,
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Day after the last requested day (exclusive).
    pub end: NaiveDate,
}

impl PriceRequest {
    /// Build a request for `tickers` over `[start, end)`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `tickers` is empty or the range is empty.
    pub fn new(
        tickers: Vec<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, SentivolError> {
        if tickers.is_empty() {
            return Err(SentivolError::InvalidArg(
                "no tickers specified for price request".into(),
            ));
        }
        if start >= end {
            return Err(SentivolError::InvalidArg(format!(
                "empty price range [{start}, {end})"
            )));
        }
        Ok(Self {
            tickers,
            start,
            end,
        })
    }
}
