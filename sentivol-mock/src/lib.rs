//! sentivol-mock
//!
//! Deterministic connectors and scorers for tests and offline demos.
//!
//! - [`MockConnector`]: static fixtures for AAPL, TSLA, MSFT and GOOG. The
//!   ticker `FAIL` always fails, other tickers are not found.
//! - [`DynamicMock`]: per-company / per-ticker behaviors set at runtime plus a
//!   request log.
//! - [`FixedScorer`]: headline → score table for exact expectations.
#![warn(missing_docs)]

use async_trait::async_trait;
use sentivol_core::connector::{NewsProvider, PriceProvider, SentivolConnector};
use sentivol_core::{
    CompanyTicker, NewsArticle, NewsRequest, PriceReport, PriceRequest, SentivolError,
};

mod dynamic;
mod fixtures;
mod scorer;

pub use dynamic::{DynamicMock, MockBehavior};
pub use scorer::FixedScorer;

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Fixture headlines are placed relative to the requested window and fixture
/// bars cover every weekday of the requested range.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used in error tagging.
    pub const NAME: &'static str = "sentivol-mock";

    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(ticker: &str, capability: &'static str) -> Result<(), SentivolError> {
        if ticker == "FAIL" {
            return Err(SentivolError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(
        &self,
        pair: &CompanyTicker,
        req: NewsRequest,
    ) -> Result<Vec<NewsArticle>, SentivolError> {
        Self::maybe_fail(&pair.ticker, "news")?;
        Ok(fixtures::news::by_pair(pair, &req).unwrap_or_default())
    }
}

#[async_trait]
impl PriceProvider for MockConnector {
    async fn daily_prices(&self, req: PriceRequest) -> Result<PriceReport, SentivolError> {
        let mut report = PriceReport::default();
        for ticker in &req.tickers {
            if let Err(e) = Self::maybe_fail(ticker, "prices") {
                report.warnings.push(e);
                continue;
            }
            match fixtures::prices::by_ticker(ticker, req.start, req.end) {
                Some(rows) if !rows.is_empty() => report.points.extend(rows),
                _ => report
                    .warnings
                    .push(SentivolError::not_found(format!("price history for {ticker}"))),
            }
        }
        if report.points.is_empty() {
            return Err(SentivolError::AllFailed(report.warnings));
        }
        Ok(report)
    }
}

impl SentivolConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }
}
