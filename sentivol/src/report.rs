//! Merged-dataset persistence and the gated correlation step.

use std::fmt::Write as _;
use std::path::Path;

use sentivol_core::{Correlation, MergedRow, SentivolError, pearson};

/// Fewest merged rows for which a correlation is computed.
pub const MIN_CORRELATION_ROWS: usize = 3;

/// Rows shown in the logged preview of the merged dataset.
pub const PREVIEW_ROWS: usize = 5;

/// Pearson correlation between sentiment and volatility over all rows.
///
/// Skipped below [`MIN_CORRELATION_ROWS`]. A computed value is NaN when the
/// coefficient is undefined (e.g. constant volatility), and in `[-1, 1]` otherwise.
#[must_use]
pub fn correlate(rows: &[MergedRow]) -> Correlation {
    if rows.len() < MIN_CORRELATION_ROWS {
        return Correlation::Skipped { rows: rows.len() };
    }
    let xs: Vec<f64> = rows.iter().map(|r| r.sentiment_score).collect();
    let ys: Vec<f64> = rows.iter().map(|r| r.volatility_on_trading_date).collect();
    Correlation::Computed(pearson(&xs, &ys))
}

/// Column order of the persisted dataset.
pub const CSV_HEADER: [&str; 5] = [
    "company",
    "date",
    "sentiment_score",
    "trading_date",
    "volatility_on_trading_date",
];

/// NaN becomes an empty cell; infinities are kept as `inf` / `-inf`.
fn cell(v: f64) -> Option<f64> {
    (!v.is_nan()).then_some(v)
}

/// Write `rows` as CSV with a header row, replacing any existing file.
///
/// Dates are `YYYY-MM-DD`. An undefined score or volatility (NaN) is written
/// as an empty cell, while an infinite volatility from a zero session low is
/// written as `inf`.
///
/// # Errors
/// Returns `Csv` when the file cannot be created or a row cannot be written.
pub fn write_csv(path: &Path, rows: &[MergedRow]) -> Result<(), SentivolError> {
    let csv_err = |e: csv::Error| SentivolError::Csv(format!("{}: {e}", path.display()));
    let mut w = csv::Writer::from_path(path).map_err(csv_err)?;
    w.write_record(CSV_HEADER).map_err(csv_err)?;
    for r in rows {
        w.serialize((
            r.company.as_str(),
            r.date,
            cell(r.sentiment_score),
            r.trading_date,
            cell(r.volatility_on_trading_date),
        ))
        .map_err(csv_err)?;
    }
    w.flush()
        .map_err(|e| SentivolError::Csv(format!("{}: {e}", path.display())))?;
    Ok(())
}

/// Fixed-width text table of the first `n` rows.
#[must_use]
pub fn preview(rows: &[MergedRow], n: usize) -> String {
    let mut out = format!(
        "{:<12} {:<10} {:>15} {:<12} {:>26}",
        "company", "date", "sentiment_score", "trading_date", "volatility_on_trading_date"
    );
    for r in rows.iter().take(n) {
        let _ = write!(
            out,
            "\n{:<12} {:<10} {:>15.4} {:<12} {:>26.6}",
            r.company, r.date, r.sentiment_score, r.trading_date, r.volatility_on_trading_date
        );
    }
    out
}
