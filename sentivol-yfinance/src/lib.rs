//! sentivol-yfinance
//!
//! Public connector that implements `PriceProvider` on top of the Yahoo
//! Finance chart endpoint. One batched call fetches every ticker in turn and
//! reshapes the column-oriented charts into one `PricePoint` per
//! (ticker, exchange-local day).
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod wire;

use std::collections::HashSet;
use std::sync::Arc;

use adapter::{ChartSeries, RealAdapter, YfChart};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use sentivol_core::{
    PricePoint, PriceReport, PriceRequest, SentivolError,
    connector::{PriceProvider, SentivolConnector},
};

/// Public connector type. Production users will construct with `YfConnector::new_default()`.
pub struct YfConnector {
    chart: Arc<dyn YfChart>,
}

/// Timezone used to turn bar timestamps into trading days.
#[derive(Debug, Clone, Copy)]
enum ExchangeZone {
    Named(Tz),
    Offset(FixedOffset),
    Utc,
}

impl ExchangeZone {
    fn resolve(series: &ChartSeries) -> Self {
        if let Some(tz) = series.timezone.as_deref().and_then(|n| n.parse::<Tz>().ok()) {
            return Self::Named(tz);
        }
        if let Some(off) = series.gmtoffset.and_then(FixedOffset::east_opt) {
            return Self::Offset(off);
        }
        Self::Utc
    }

    fn local_date(self, ts: i64) -> Option<NaiveDate> {
        let utc = DateTime::<Utc>::from_timestamp(ts, 0)?;
        Some(match self {
            Self::Named(tz) => utc.with_timezone(&tz).date_naive(),
            Self::Offset(off) => utc.with_timezone(&off).date_naive(),
            Self::Utc => utc.date_naive(),
        })
    }
}

impl YfConnector {
    /// Stable connector name used in logs and error tagging.
    pub const NAME: &'static str = "sentivol-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: SentivolError, what: &str) -> SentivolError {
        match e {
            SentivolError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    SentivolError::not_found(what.to_string())
                } else {
                    SentivolError::connector(Self::NAME, msg)
                }
            }
            other => other,
        }
    }

    /// Build against the production endpoint.
    #[must_use]
    pub fn new_default() -> Self {
        Self::from_adapter(Arc::new(RealAdapter::new_default()))
    }

    /// Build against a custom endpoint root (e.g. a local mock server).
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` does not parse.
    pub fn with_base_url(base_url: &str) -> Result<Self, SentivolError> {
        let real = RealAdapter::new(reqwest::Client::new(), base_url)?;
        Ok(Self::from_adapter(Arc::new(real)))
    }

    /// Build from any chart adapter, e.g. `<dyn YfChart>::from_fn` in tests.
    #[must_use]
    pub fn from_adapter(chart: Arc<dyn YfChart>) -> Self {
        Self { chart }
    }

    /// Reshape one chart into rows inside `[start, end)`.
    ///
    /// Bars missing any of open/high/low/close are skipped. When a day appears
    /// twice (Yahoo occasionally repeats the live bar) the first one wins.
    fn reshape(
        ticker: &str,
        series: &ChartSeries,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<PricePoint> {
        let zone = ExchangeZone::resolve(series);
        let col = |v: &Vec<Option<f64>>, i: usize| v.get(i).copied().flatten();
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(series.timestamps.len());
        for (i, &ts) in series.timestamps.iter().enumerate() {
            let Some(date) = zone.local_date(ts) else {
                continue;
            };
            if date < start || date >= end {
                continue;
            }
            let (Some(open), Some(high), Some(low), Some(close)) = (
                col(&series.open, i),
                col(&series.high, i),
                col(&series.low, i),
                col(&series.close, i),
            ) else {
                continue;
            };
            if !seen.insert(date) {
                continue;
            }
            out.push(PricePoint {
                ticker: ticker.to_string(),
                company: None,
                date,
                open,
                high,
                low,
                close,
                adj_close: col(&series.adj_close, i),
                volume: series.volume.get(i).copied().flatten(),
            });
        }
        out
    }
}

#[async_trait]
impl PriceProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "sentivol::yfinance",
            skip(self, req),
            fields(tickers = req.tickers.len(), start = %req.start, end = %req.end),
        )
    )]
    async fn daily_prices(&self, req: PriceRequest) -> Result<PriceReport, SentivolError> {
        let mut report = PriceReport::default();
        for ticker in &req.tickers {
            let what = format!("price history for {ticker}");
            let series = match self.chart.daily_chart(ticker, req.start, req.end).await {
                Ok(s) => s,
                Err(e) => {
                    let e = Self::normalize_error(e, &what);
                    #[cfg(feature = "tracing")]
                    tracing::warn!(target: "sentivol::yfinance", ticker = %ticker, error = %e, "chart fetch failed");
                    report.warnings.push(e);
                    continue;
                }
            };
            let rows = Self::reshape(ticker, &series, req.start, req.end);
            if rows.is_empty() {
                report.warnings.push(SentivolError::not_found(what));
                continue;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "sentivol::yfinance", ticker = %ticker, rows = rows.len(), "chart reshaped");
            report.points.extend(rows);
        }
        if report.points.is_empty() {
            return Err(SentivolError::AllFailed(report.warnings));
        }
        Ok(report)
    }
}

impl SentivolConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }
}
