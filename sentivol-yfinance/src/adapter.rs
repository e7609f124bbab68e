use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use sentivol_core::SentivolError;
use url::Url;

use crate::wire::{AdjCloseBlock, ChartEnvelope, QuoteBlock};

/// Decoded daily chart for one ticker, column oriented like the wire format.
///
/// Columns are index-aligned with `timestamps`; a `None` marks a missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    /// IANA name of the exchange timezone, e.g. `America/New_York`.
    pub timezone: Option<String>,
    /// Exchange offset from UTC in seconds, used when `timezone` is unknown.
    pub gmtoffset: Option<i32>,
    /// Bar timestamps in Unix seconds.
    pub timestamps: Vec<i64>,
    /// Opening prices.
    pub open: Vec<Option<f64>>,
    /// Session highs.
    pub high: Vec<Option<f64>>,
    /// Session lows.
    pub low: Vec<Option<f64>>,
    /// Closing prices.
    pub close: Vec<Option<f64>>,
    /// Adjusted closes; may be empty when the provider omits them.
    pub adj_close: Vec<Option<f64>>,
    /// Traded volume.
    pub volume: Vec<Option<u64>>,
}

/// Daily chart abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfChart: Send + Sync {
    /// Fetch daily bars for `ticker` over `[start, end)`.
    async fn daily_chart(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartSeries, SentivolError>;
}

/// Production adapter calling the chart endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct RealAdapter {
    client: Client,
    base_url: String,
}

impl RealAdapter {
    /// Production endpoint root.
    pub const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com/";
    const USER_AGENT: &'static str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

    /// Adapter against the production endpoint with a browser-like user agent.
    #[must_use]
    pub fn new_default() -> Self {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Adapter with a caller-provided HTTP client and endpoint root.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` does not parse.
    pub fn new(client: Client, base_url: &str) -> Result<Self, SentivolError> {
        let mut url = Url::parse(base_url)
            .map_err(|e| SentivolError::InvalidArg(format!("yahoo base url '{base_url}': {e}")))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            client,
            base_url: url.into(),
        })
    }

    /// Endpoint root requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn midnight_ts(d: NaiveDate) -> i64 {
    d.and_hms_opt(0, 0, 0)
        .map_or(0, |dt| dt.and_utc().timestamp())
}

fn map_err(e: &reqwest::Error) -> SentivolError {
    SentivolError::connector(crate::YfConnector::NAME, e.to_string())
}

#[async_trait]
impl YfChart for RealAdapter {
    async fn daily_chart(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartSeries, SentivolError> {
        let url = Url::parse(&self.base_url)
            .and_then(|base| base.join(&format!("v8/finance/chart/{ticker}")))
            .map_err(|e| SentivolError::InvalidArg(format!("chart url for {ticker}: {e}")))?;
        let period1 = midnight_ts(start).to_string();
        let period2 = midnight_ts(end).to_string();
        let resp = self
            .client
            .get(url)
            .query(&[
                ("period1", period1.as_str()),
                ("period2", period2.as_str()),
                ("interval", "1d"),
                ("events", "history"),
                ("includeAdjustedClose", "true"),
            ])
            .send()
            .await
            .map_err(|e| map_err(&e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| map_err(&e))?;

        let parsed: Result<ChartEnvelope, _> = serde_json::from_str(&body);
        let envelope = match parsed {
            Ok(env) => env,
            Err(e) if status.is_success() => {
                return Err(SentivolError::connector(
                    crate::YfConnector::NAME,
                    format!("malformed chart body for {ticker}: {e}"),
                ));
            }
            Err(_) => {
                return Err(SentivolError::connector(
                    crate::YfConnector::NAME,
                    format!("HTTP {status} for {ticker}: {}", body.trim()),
                ));
            }
        };
        if let Some(err) = envelope.chart.error {
            return Err(SentivolError::connector(
                crate::YfConnector::NAME,
                format!("{}: {}", err.code, err.description),
            ));
        }
        if !status.is_success() {
            return Err(SentivolError::connector(
                crate::YfConnector::NAME,
                format!("HTTP {status} for {ticker}"),
            ));
        }
        let data = envelope
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| SentivolError::not_found(format!("price history for {ticker}")))?;

        let QuoteBlock {
            open,
            high,
            low,
            close,
            volume,
        } = data.indicators.quote.into_iter().next().unwrap_or_default();
        let AdjCloseBlock { adjclose } = data
            .indicators
            .adjclose
            .into_iter()
            .next()
            .unwrap_or_default();

        Ok(ChartSeries {
            timezone: data.meta.exchange_timezone_name,
            gmtoffset: data.meta.gmtoffset,
            timestamps: data.timestamp,
            open,
            high,
            low,
            close,
            adj_close: adjclose,
            volume,
        })
    }
}

impl dyn YfChart {
    /// Build a `YfChart` from a closure (tests and demos).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfChart>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, NaiveDate, NaiveDate) -> Result<ChartSeries, SentivolError>,
    {
        struct FnChart<F>(F);
        #[async_trait]
        impl<F> YfChart for FnChart<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, NaiveDate, NaiveDate) -> Result<ChartSeries, SentivolError>,
        {
            async fn daily_chart(
                &self,
                ticker: &str,
                start: NaiveDate,
                end: NaiveDate,
            ) -> Result<ChartSeries, SentivolError> {
                (self.0)(ticker.to_string(), start, end)
            }
        }
        Arc::new(FnChart(f))
    }
}
