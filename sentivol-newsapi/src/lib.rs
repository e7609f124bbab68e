//! sentivol-newsapi
//!
//! Connector that implements `NewsProvider` on top of the NewsAPI
//! `/v2/everything` search endpoint.
#![warn(missing_docs)]

mod builder;
mod wire;

pub use builder::NewsApiConnectorBuilder;

use async_trait::async_trait;
use reqwest::Client;
use sentivol_core::{
    CompanyTicker, NewsArticle, NewsRequest, SentivolError,
    connector::{NewsProvider, SentivolConnector},
};
use url::Url;

use wire::{ErrorBody, EverythingResponse};

/// Public connector type. Construct with [`NewsApiConnector::new`] or [`NewsApiConnector::builder`].
#[derive(Debug, Clone)]
pub struct NewsApiConnector {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl NewsApiConnector {
    /// Stable connector name used in logs and error tagging.
    pub const NAME: &'static str = "sentivol-newsapi";
    /// Production endpoint root.
    pub const DEFAULT_BASE_URL: &'static str = "https://newsapi.org/";

    /// Connector against the production endpoint with a default HTTP client.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SentivolError> {
        Self::builder().api_key(api_key).build()
    }

    /// Start building a connector with a custom endpoint or HTTP client.
    #[must_use]
    pub fn builder() -> NewsApiConnectorBuilder {
        NewsApiConnectorBuilder::default()
    }

    /// Root URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self) -> Result<Url, SentivolError> {
        self.base_url
            .join("v2/everything")
            .map_err(|e| SentivolError::InvalidArg(format!("news endpoint: {e}")))
    }

    fn map_reqwest_err(e: &reqwest::Error) -> SentivolError {
        SentivolError::connector(Self::NAME, e.to_string())
    }

    fn status_error(status: reqwest::StatusCode, body: &str) -> SentivolError {
        let detail = error_detail(body).unwrap_or_else(|| body.trim().to_string());
        SentivolError::connector(Self::NAME, format!("HTTP {status}: {detail}"))
    }
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match (parsed.code, parsed.message) {
        (Some(code), Some(msg)) => Some(format!("{code}: {msg}")),
        (None, Some(msg)) => Some(msg),
        (Some(code), None) => Some(code),
        (None, None) => None,
    }
}

#[async_trait]
impl NewsProvider for NewsApiConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "sentivol::newsapi",
            skip(self, pair, req),
            fields(company = %pair.company, ticker = %pair.ticker, from = %req.from, to = %req.to),
        )
    )]
    async fn news(
        &self,
        pair: &CompanyTicker,
        req: NewsRequest,
    ) -> Result<Vec<NewsArticle>, SentivolError> {
        let url = self.endpoint()?;
        let page_size = req.page_size.to_string();
        let from = req.from.format("%Y-%m-%d").to_string();
        let to = req.to.format("%Y-%m-%d").to_string();
        let resp = self
            .client
            .get(url)
            .query(&[
                ("q", req.query.as_str()),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("language", req.language.as_str()),
                ("sortBy", req.sort_by.as_str()),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Self::map_reqwest_err(&e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Self::map_reqwest_err(&e))?;
        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let parsed: EverythingResponse = serde_json::from_str(&body)
            .map_err(|e| SentivolError::connector(Self::NAME, format!("malformed body: {e}")))?;
        if parsed.status != "ok" {
            let detail = parsed
                .message
                .or(parsed.code)
                .unwrap_or_else(|| parsed.status.clone());
            return Err(SentivolError::connector(Self::NAME, detail));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sentivol::newsapi",
            articles = parsed.articles.len(),
            "news search returned"
        );

        Ok(parsed
            .articles
            .into_iter()
            .map(|a| {
                let published_at = a.published();
                NewsArticle {
                    company: pair.company.clone(),
                    ticker: pair.ticker.clone(),
                    title: a.title,
                    published_at,
                    source: a.source.and_then(|s| s.name),
                    url: a.url,
                }
            })
            .collect())
    }
}

impl SentivolConnector for NewsApiConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "NewsAPI"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}
