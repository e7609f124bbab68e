use sentivol_core::{DateWindow, PriceReport, PriceRequest, SentivolError, attach_companies};

use crate::Sentivol;

impl Sentivol {
    /// Fetch daily bars for every configured ticker in one batched call.
    ///
    /// The range is the analysis window widened by `price_lookback_days` before
    /// and `price_lookahead_days` after, with an exclusive end. Each row gets
    /// its company from the inverse of the configured mapping.
    ///
    /// A failed provider call is recoverable: it is logged and yields an empty
    /// report whose warnings carry the individual failures.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the padded range cannot be represented,
    /// `Unsupported` when no registered connector serves prices, and any
    /// provider error for which [`SentivolError::is_fatal`] holds.
    #[tracing::instrument(
        target = "sentivol::prices",
        skip(self),
        fields(tickers = self.cfg.companies.len()),
    )]
    pub async fn fetch_prices(&self, window: DateWindow) -> Result<PriceReport, SentivolError> {
        let (connector, provider) = self.price_provider()?;
        let range = window.padded(self.cfg.price_lookback_days, self.cfg.price_lookahead_days)?;
        let req = PriceRequest::new(self.cfg.tickers(), range.start, range.end)?;
        tracing::info!(start = %req.start, end = %req.end, "fetching daily prices");

        let mut report = match provider.daily_prices(req).await {
            Ok(report) => report,
            Err(e) if e.is_fatal() => {
                tracing::error!(error = %e, "price provider rejected the request");
                return Err(e);
            }
            Err(e) => {
                let e = crate::tag_err(connector, e);
                tracing::warn!(error = %e, "price fetch failed; continuing without prices");
                PriceReport {
                    points: vec![],
                    warnings: e.flatten(),
                }
            }
        };
        for w in &report.warnings {
            tracing::warn!(warning = %w, "price provider warning");
        }
        attach_companies(&mut report.points, &self.cfg.company_by_ticker());
        tracing::info!(rows = report.points.len(), "prices fetched");
        Ok(report)
    }
}
