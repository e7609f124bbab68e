use sentivol_core::{CompanyFetch, DateWindow, NewsReport, NewsRequest, SentivolError};

use crate::Sentivol;

impl Sentivol {
    /// Query the news provider once per configured company, in order.
    ///
    /// A failing company is logged and contributes no articles; its error is
    /// kept in the returned outcomes. The fold over companies never stops early.
    ///
    /// # Errors
    /// Returns `NoArticles` when no company contributed a single article,
    /// `Unsupported` when no registered connector serves news, and any
    /// provider error for which [`SentivolError::is_fatal`] holds.
    #[tracing::instrument(
        target = "sentivol::news",
        skip(self),
        fields(companies = self.cfg.companies.len(), from = %window.start, to = %window.end),
    )]
    pub async fn fetch_news(&self, window: DateWindow) -> Result<NewsReport, SentivolError> {
        let (connector, provider) = self.news_provider()?;
        let mut report = NewsReport::default();
        for pair in &self.cfg.companies {
            let req = NewsRequest {
                query: self.cfg.news_query(pair),
                from: window.start,
                to: window.end,
                language: self.cfg.language.clone(),
                sort_by: self.cfg.sort_by.clone(),
                page_size: self.cfg.page_size,
            };
            tracing::info!(company = %pair.company, ticker = %pair.ticker, "fetching news");
            let outcome = match provider.news(pair, req).await {
                Ok(articles) => {
                    tracing::info!(company = %pair.company, articles = articles.len(), "news fetched");
                    let n = articles.len();
                    report.articles.extend(articles);
                    CompanyFetch {
                        company: pair.company.clone(),
                        ticker: pair.ticker.clone(),
                        articles: n,
                        error: None,
                    }
                }
                Err(e) if e.is_fatal() => {
                    tracing::error!(company = %pair.company, error = %e, "news provider rejected the request");
                    return Err(e);
                }
                Err(e) => {
                    let e = crate::tag_err(connector, e);
                    tracing::warn!(company = %pair.company, error = %e, "news fetch failed; skipping company");
                    CompanyFetch {
                        company: pair.company.clone(),
                        ticker: pair.ticker.clone(),
                        articles: 0,
                        error: Some(e),
                    }
                }
            };
            report.outcomes.push(outcome);
        }
        if report.articles.is_empty() {
            tracing::error!("no news articles fetched for any company");
            return Err(SentivolError::NoArticles);
        }
        Ok(report)
    }
}
