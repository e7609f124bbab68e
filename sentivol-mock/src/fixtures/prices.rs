use chrono::{Datelike, NaiveDate, Weekday};
use sentivol_core::PricePoint;

const AAPL: &[f64] = &[0.010, 0.020, 0.015];
const TSLA: &[f64] = &[0.040, 0.030, 0.055, 0.020];
const MSFT: &[f64] = &[0.012, 0.008];
const GOOG: &[f64] = &[0.018, 0.022, 0.011];

/// (base price, repeating intraday spreads) per ticker.
fn profile(ticker: &str) -> Option<(f64, &'static [f64])> {
    match ticker {
        "AAPL" => Some((180.0, AAPL)),
        "TSLA" => Some((170.0, TSLA)),
        "MSFT" => Some((410.0, MSFT)),
        "GOOG" => Some((165.0, GOOG)),
        _ => None,
    }
}

/// Weekday bars over `[start, end)`; weekends have no bar.
pub fn by_ticker(ticker: &str, start: NaiveDate, end: NaiveDate) -> Option<Vec<PricePoint>> {
    let (base, spreads) = profile(ticker)?;
    let mut out = Vec::new();
    let mut i = 0usize;
    for date in start.iter_days().take_while(|d| *d < end) {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let low = base + i as f64;
        let high = low * (1.0 + spreads[i % spreads.len()]);
        out.push(PricePoint {
            ticker: ticker.to_string(),
            company: None,
            date,
            open: low,
            high,
            low,
            close: high,
            adj_close: Some(high),
            volume: Some(1_000_000 + i as u64 * 10_000),
        });
        i += 1;
    }
    Some(out)
}
