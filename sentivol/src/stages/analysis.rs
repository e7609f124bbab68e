use sentivol_core::{
    DailySentiment, MergedRow, NewsArticle, PricePoint, TradingDateIndex, aggregate_daily,
    merge_inner, score_articles,
};

use crate::Sentivol;

impl Sentivol {
    /// Score every headline and average the scores per (company, day).
    #[must_use]
    pub fn daily_sentiment(&self, articles: &[NewsArticle]) -> Vec<DailySentiment> {
        let scored = score_articles(self.scorer.as_ref(), articles);
        let dropped = articles.len() - scored.len();
        if dropped > 0 {
            tracing::debug!(dropped, "articles without a publication time were dropped");
        }
        let daily = aggregate_daily(&scored);
        tracing::info!(
            scored = scored.len(),
            rows = daily.len(),
            "aggregated daily sentiment"
        );
        daily
    }

    /// Align sentiment days to trading days and join with same-day volatility.
    ///
    /// Returns the trading-day index alongside the merged rows.
    #[must_use]
    pub fn align_and_merge(
        &self,
        daily: &[DailySentiment],
        points: &[PricePoint],
    ) -> (TradingDateIndex, Vec<MergedRow>) {
        let index = TradingDateIndex::from_points(points);
        let merged = merge_inner(daily, points, &index);
        if merged.len() < daily.len() {
            tracing::debug!(
                dropped = daily.len() - merged.len(),
                "sentiment rows without a matching trading day were dropped"
            );
        }
        tracing::info!(
            trading_days = index.len(),
            rows = merged.len(),
            "merged sentiment with volatility"
        );
        (index, merged)
    }
}
