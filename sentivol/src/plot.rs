//! Scatter plot of sentiment against same-day volatility, rendered to SVG.

use std::path::Path;

use plotters::prelude::*;
use sentivol_core::{MergedRow, SentivolError, linear_fit};

/// Chart title.
pub const TITLE: &str = "News Sentiment vs. Same-Day Stock Volatility";
/// Horizontal axis label.
pub const X_LABEL: &str = "Average Daily Sentiment Score";
/// Vertical axis label.
pub const Y_LABEL: &str = "Same-Day Price Volatility";

const SIZE: (u32, u32) = (1000, 700);
const POINT_RADIUS: i32 = 5;
const DASH: u32 = 10;
const DASH_GAP: u32 = 6;

fn plot_err<E: std::fmt::Display>(e: E) -> SentivolError {
    SentivolError::Plot(e.to_string())
}

/// Axis range covering `values` with a margin; a unit range when nothing is finite.
fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.1
    } else {
        lo.abs().max(1.0) * 0.1
    };
    (lo - pad)..(hi + pad)
}

/// Render one colour and legend entry per company plus a dashed least-squares line.
///
/// Points with a non-finite coordinate are not drawn. The line is omitted
/// when fewer than two finite points remain or every sentiment value is equal.
///
/// # Errors
/// Returns `Plot` when the backend fails to draw or write the file.
pub fn render_scatter(path: &Path, rows: &[MergedRow]) -> Result<(), SentivolError> {
    let finite: Vec<&MergedRow> = rows
        .iter()
        .filter(|r| r.sentiment_score.is_finite() && r.volatility_on_trading_date.is_finite())
        .collect();
    if finite.len() < rows.len() {
        tracing::debug!(
            skipped = rows.len() - finite.len(),
            "non-finite points left out of the plot"
        );
    }

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let x_range = padded_range(finite.iter().map(|r| r.sentiment_score));
    let y_range = padded_range(finite.iter().map(|r| r.volatility_on_trading_date));
    let (x_lo, x_hi) = (x_range.start, x_range.end);

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(plot_err)?;

    let mut companies: Vec<&str> = finite.iter().map(|r| r.company.as_str()).collect();
    companies.sort_unstable();
    companies.dedup();
    for (i, company) in companies.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let points: Vec<(f64, f64)> = finite
            .iter()
            .filter(|r| r.company == *company)
            .map(|r| (r.sentiment_score, r.volatility_on_trading_date))
            .collect();
        chart
            .draw_series(
                points
                    .into_iter()
                    .map(move |p| Circle::new(p, POINT_RADIUS, color.filled())),
            )
            .map_err(plot_err)?
            .label(*company)
            .legend(move |(x, y)| Circle::new((x, y), POINT_RADIUS, color.filled()));
    }

    let xs: Vec<f64> = finite.iter().map(|r| r.sentiment_score).collect();
    let ys: Vec<f64> = finite.iter().map(|r| r.volatility_on_trading_date).collect();
    if let Some(fit) = linear_fit(&xs, &ys) {
        chart
            .draw_series(DashedLineSeries::new(
                vec![(x_lo, fit.at(x_lo)), (x_hi, fit.at(x_hi))],
                DASH,
                DASH_GAP,
                BLACK.stroke_width(2),
            ))
            .map_err(plot_err)?
            .label("least-squares fit")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;
    Ok(())
}
