//! Run configuration passed explicitly into every pipeline stage.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SentivolError;
use crate::model::CompanyTicker;
use crate::request::DateWindow;

/// Placeholder replaced with the company name in [`SentivolConfig::query_template`].
pub const COMPANY_PLACEHOLDER: &str = "{company}";
/// Placeholder replaced with the ticker in [`SentivolConfig::query_template`].
pub const TICKER_PLACEHOLDER: &str = "{ticker}";

/// Configuration for one analysis run.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentivolConfig {
    /// Companies to analyze, in processing order.
    pub companies: Vec<CompanyTicker>,
    /// Directory receiving the CSV and plot artifacts; created if absent.
    pub output_dir: PathBuf,
    /// News provider credential. Never serialized back out.
    #[serde(skip_serializing)]
    pub news_api_key: Option<String>,
    /// Days between today and the last analyzed day.
    pub end_offset_days: u64,
    /// Days between the first and the last analyzed day.
    pub window_days: u64,
    /// Extra days fetched before the analysis start so early news can be aligned.
    pub price_lookback_days: u64,
    /// Days added past the analysis end to form the exclusive price range end.
    pub price_lookahead_days: u64,
    /// News language filter.
    pub language: String,
    /// News sort key.
    pub sort_by: String,
    /// Maximum articles requested per company.
    pub page_size: u32,
    /// News query with `{company}` and `{ticker}` placeholders.
    pub query_template: String,
    /// File name of the merged dataset inside `output_dir`.
    pub csv_file_name: String,
    /// File name of the scatter plot inside `output_dir`.
    pub plot_file_name: String,
    /// Whether to render the scatter plot.
    pub plot: bool,
}

impl Default for SentivolConfig {
    fn default() -> Self {
        Self {
            companies: vec![
                CompanyTicker::new("Apple", "AAPL"),
                CompanyTicker::new("Tesla", "TSLA"),
                CompanyTicker::new("Microsoft", "MSFT"),
            ],
            output_dir: PathBuf::from("project_data"),
            news_api_key: None,
            end_offset_days: 4,
            window_days: 4,
            price_lookback_days: 30,
            price_lookahead_days: 1,
            language: "en".into(),
            sort_by: "publishedAt".into(),
            page_size: 100,
            query_template: r#"("{company}" OR "{ticker}") AND (stock OR market)"#.into(),
            csv_file_name: "final_analysis_data.csv".into(),
            plot_file_name: "sentiment_vs_volatility.svg".into(),
            plot: true,
        }
    }
}

impl std::fmt::Debug for SentivolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentivolConfig")
            .field("companies", &self.companies)
            .field("output_dir", &self.output_dir)
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("end_offset_days", &self.end_offset_days)
            .field("window_days", &self.window_days)
            .field("price_lookback_days", &self.price_lookback_days)
            .field("price_lookahead_days", &self.price_lookahead_days)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .field("page_size", &self.page_size)
            .field("query_template", &self.query_template)
            .field("csv_file_name", &self.csv_file_name)
            .field("plot_file_name", &self.plot_file_name)
            .field("plot", &self.plot)
            .finish()
    }
}

impl SentivolConfig {
    /// Check the company list and request parameters before any provider is contacted.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty company list, duplicate companies or
    /// tickers, blank names, a zero page size, or empty artifact file names.
    pub fn validate(&self) -> Result<(), SentivolError> {
        if self.companies.is_empty() {
            return Err(SentivolError::InvalidArg(
                "no companies configured".to_string(),
            ));
        }
        let mut companies = HashSet::new();
        let mut tickers = HashSet::new();
        for pair in &self.companies {
            if pair.company.trim().is_empty() || pair.ticker.trim().is_empty() {
                return Err(SentivolError::InvalidArg(format!(
                    "blank company or ticker in pair {pair:?}"
                )));
            }
            if !companies.insert(pair.company.as_str()) {
                return Err(SentivolError::InvalidArg(format!(
                    "duplicate company '{}' in configuration",
                    pair.company
                )));
            }
            if !tickers.insert(pair.ticker.as_str()) {
                return Err(SentivolError::InvalidArg(format!(
                    "duplicate ticker '{}' in configuration",
                    pair.ticker
                )));
            }
        }
        if self.page_size == 0 {
            return Err(SentivolError::InvalidArg(
                "page_size must be positive".to_string(),
            ));
        }
        if self.csv_file_name.is_empty() || self.plot_file_name.is_empty() {
            return Err(SentivolError::InvalidArg(
                "artifact file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Analysis window ending `end_offset_days` before `today`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the offsets leave the supported date range.
    pub fn window(&self, today: NaiveDate) -> Result<DateWindow, SentivolError> {
        DateWindow::ending_days_ago(today, self.end_offset_days, self.window_days)
    }

    /// Render the news query for one company.
    #[must_use]
    pub fn news_query(&self, pair: &CompanyTicker) -> String {
        self.query_template
            .replace(COMPANY_PLACEHOLDER, &pair.company)
            .replace(TICKER_PLACEHOLDER, &pair.ticker)
    }

    /// Tickers in configuration order.
    #[must_use]
    pub fn tickers(&self) -> Vec<String> {
        self.companies.iter().map(|p| p.ticker.clone()).collect()
    }

    /// Inverse of the company → ticker mapping.
    #[must_use]
    pub fn company_by_ticker(&self) -> HashMap<String, String> {
        self.companies
            .iter()
            .map(|p| (p.ticker.clone(), p.company.clone()))
            .collect()
    }

    /// Full path of the merged dataset.
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file_name)
    }

    /// Full path of the scatter plot.
    #[must_use]
    pub fn plot_path(&self) -> PathBuf {
        self.output_dir.join(&self.plot_file_name)
    }
}
