use std::collections::HashMap;

use chrono::NaiveDate;

use crate::timeseries::align::TradingDateIndex;
use crate::{DailySentiment, MergedRow, PricePoint};

/// Fill `company` on every price row from the ticker → company mapping.
///
/// Rows whose ticker is not mapped are reset to `None`; they still count as
/// trading days but never match in [`merge_inner`].
pub fn attach_companies(points: &mut [PricePoint], company_by_ticker: &HashMap<String, String>) {
    for p in points {
        p.company = company_by_ticker.get(&p.ticker).cloned();
    }
}

/// Inner join of daily sentiment with the volatility of its aligned trading day.
///
/// Each sentiment row is mapped to the first trading day on or after its date
/// and paired with the price row of the same company on that day. Rows without
/// a trading day or without a matching price row are dropped. When several
/// price rows share a (company, day) key the first one wins. The result is
/// ordered by company then news day and never longer than `daily`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "sentivol::core::merge",
        skip(daily, points, index),
        fields(daily = daily.len(), points = points.len(), trading_days = index.len()),
    )
)]
#[must_use]
pub fn merge_inner(
    daily: &[DailySentiment],
    points: &[PricePoint],
    index: &TradingDateIndex,
) -> Vec<MergedRow> {
    let mut volatility: HashMap<(&str, NaiveDate), f64> = HashMap::new();
    for p in points {
        if let Some(company) = p.company.as_deref() {
            volatility
                .entry((company, p.date))
                .or_insert_with(|| p.volatility());
        }
    }

    let mut out: Vec<MergedRow> = daily
        .iter()
        .filter_map(|s| {
            let Some(trading_date) = index.next_trading_day(s.date) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "sentivol::core::merge",
                    company = %s.company,
                    date = %s.date,
                    "no trading day on or after news date; dropping"
                );
                return None;
            };
            let Some(v) = volatility.get(&(s.company.as_str(), trading_date)) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "sentivol::core::merge",
                    company = %s.company,
                    date = %s.date,
                    trading_date = %trading_date,
                    "no price row for company on trading day; dropping"
                );
                return None;
            };
            Some(MergedRow {
                company: s.company.clone(),
                date: s.date,
                sentiment_score: s.sentiment_score,
                trading_date,
                volatility_on_trading_date: *v,
            })
        })
        .collect();
    out.sort_by(|a, b| a.company.cmp(&b.company).then(a.date.cmp(&b.date)));
    out
}
