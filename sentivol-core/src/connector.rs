use async_trait::async_trait;

use crate::{CompanyTicker, NewsArticle, NewsRequest, PriceReport, PriceRequest, SentivolError};

/// Focused role trait for connectors that search news headlines.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Run one search for `pair` and tag every returned article with it.
    ///
    /// Non-success responses are returned as errors; callers decide whether the
    /// failure is fatal.
    async fn news(
        &self,
        pair: &CompanyTicker,
        req: NewsRequest,
    ) -> Result<Vec<NewsArticle>, SentivolError>;
}

/// Focused role trait for connectors that provide daily OHLCV history.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch daily bars for every ticker in `req` in one batched call.
    ///
    /// Tickers the provider cannot serve are reported as warnings; the call
    /// fails only when no ticker could be served.
    async fn daily_prices(&self, req: PriceRequest) -> Result<PriceReport, SentivolError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait SentivolConnector: Send + Sync {
    /// A stable identifier used in logs and error tagging (e.g. "sentivol-newsapi").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise news capability by returning a usable trait object reference when supported.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }

    /// Advertise price capability by returning a usable trait object reference when supported.
    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        None
    }
}
