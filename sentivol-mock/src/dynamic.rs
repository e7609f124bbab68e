use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use sentivol_core::connector::{NewsProvider, PriceProvider, SentivolConnector};
use sentivol_core::{
    CompanyTicker, NewsArticle, NewsRequest, PricePoint, PriceReport, PriceRequest,
    SentivolError,
};

/// Instruction for how a call should behave for a given key.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(SentivolError),
}

#[derive(Default)]
struct InternalState {
    news_rules: HashMap<String, MockBehavior<Vec<NewsArticle>>>,
    price_rules: HashMap<String, MockBehavior<Vec<PricePoint>>>,
    price_call: Option<MockBehavior<PriceReport>>,
    news_requests: Vec<(CompanyTicker, NewsRequest)>,
    price_requests: Vec<PriceRequest>,
}

/// Connector whose answers are configured per company (news) and per ticker (prices).
///
/// Companies without a news rule get no articles; tickers without a price rule
/// are reported as not found. Every request is recorded.
#[derive(Clone, Default)]
pub struct DynamicMock {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMock {
    /// Connector name used in error tagging.
    pub const NAME: &'static str = "sentivol-dynamic-mock";

    /// Create a mock with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the behavior of `news` calls for `company`.
    pub async fn set_news(&self, company: &str, behavior: MockBehavior<Vec<NewsArticle>>) {
        let mut guard = self.state.lock().await;
        guard.news_rules.insert(company.to_string(), behavior);
    }

    /// Set the bars (or failure) returned for `ticker`.
    pub async fn set_prices(&self, ticker: &str, behavior: MockBehavior<Vec<PricePoint>>) {
        let mut guard = self.state.lock().await;
        guard.price_rules.insert(ticker.to_string(), behavior);
    }

    /// Override the whole batched price call, bypassing per-ticker rules.
    pub async fn set_price_call(&self, behavior: MockBehavior<PriceReport>) {
        let mut guard = self.state.lock().await;
        guard.price_call = Some(behavior);
    }

    /// News requests seen so far, in call order.
    pub async fn news_requests(&self) -> Vec<(CompanyTicker, NewsRequest)> {
        self.state.lock().await.news_requests.clone()
    }

    /// Price requests seen so far, in call order.
    pub async fn price_requests(&self) -> Vec<PriceRequest> {
        self.state.lock().await.price_requests.clone()
    }
}

#[async_trait]
impl NewsProvider for DynamicMock {
    async fn news(
        &self,
        pair: &CompanyTicker,
        req: NewsRequest,
    ) -> Result<Vec<NewsArticle>, SentivolError> {
        let mut guard = self.state.lock().await;
        guard.news_requests.push((pair.clone(), req));
        match guard.news_rules.get(&pair.company) {
            Some(MockBehavior::Return(articles)) => Ok(articles.clone()),
            Some(MockBehavior::Fail(e)) => Err(e.clone()),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl PriceProvider for DynamicMock {
    async fn daily_prices(&self, req: PriceRequest) -> Result<PriceReport, SentivolError> {
        let mut guard = self.state.lock().await;
        guard.price_requests.push(req.clone());
        if let Some(call) = &guard.price_call {
            return match call {
                MockBehavior::Return(report) => Ok(report.clone()),
                MockBehavior::Fail(e) => Err(e.clone()),
            };
        }
        let mut report = PriceReport::default();
        for ticker in &req.tickers {
            match guard.price_rules.get(ticker) {
                Some(MockBehavior::Return(rows)) => report.points.extend(rows.iter().cloned()),
                Some(MockBehavior::Fail(e)) => report.warnings.push(e.clone()),
                None => report
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

impl SentivolConnector for DynamicMock {
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
