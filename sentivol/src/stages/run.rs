use chrono::NaiveDate;
use sentivol_core::{Correlation, RunReport, SentivolError};

use crate::{Sentivol, plot, report};

impl Sentivol {
    /// Run every stage for the window ending `end_offset_days` before `today`.
    ///
    /// Recoverable issues (a failing company, a failed price fetch, an empty
    /// merge, too few rows for a correlation) degrade the run and are recorded
    /// in the returned report. Artifacts are written only when the merge
    /// produced rows.
    ///
    /// # Errors
    /// Returns `NoArticles` when no headline was fetched at all, and `Io`,
    /// `Csv` or `Plot` when an artifact cannot be written.
    #[tracing::instrument(target = "sentivol::run", skip(self))]
    pub async fn run(&self, today: NaiveDate) -> Result<RunReport, SentivolError> {
        let window = self.cfg.window(today)?;
        tracing::info!(start = %window.start, end = %window.end, "analysis window");

        let news = self.fetch_news(window).await?;
        tracing::info!(articles = news.articles.len(), "total articles fetched");
        let daily = self.daily_sentiment(&news.articles);

        let prices = self.fetch_prices(window).await?;
        let (index, merged) = self.align_and_merge(&daily, &prices.points);

        let mut warnings: Vec<SentivolError> =
            news.failures().filter_map(|f| f.error.clone()).collect();
        warnings.extend(prices.warnings.iter().cloned());

        let mut out = RunReport {
            window,
            news: news.outcomes.clone(),
            articles: news.articles.len(),
            daily_sentiment_rows: daily.len(),
            price_rows: prices.points.len(),
            trading_days: index.len(),
            merged_rows: merged.len(),
            correlation: None,
            csv_path: None,
            plot_path: None,
            warnings,
        };

        if merged.is_empty() {
            tracing::warn!(
                "merge produced no rows; check API limits or the date window. Skipping CSV, correlation and plot"
            );
            return Ok(out);
        }

        std::fs::create_dir_all(&self.cfg.output_dir)?;
        let csv_path = self.cfg.csv_path();
        report::write_csv(&csv_path, &merged)?;
        tracing::info!(path = %csv_path.display(), rows = merged.len(), "merged data saved");
        tracing::info!(
            "preview of the merged data:\n{}",
            report::preview(&merged, report::PREVIEW_ROWS)
        );
        out.csv_path = Some(csv_path);

        let correlation = report::correlate(&merged);
        match correlation {
            Correlation::Skipped { rows } => tracing::warn!(
                rows,
                min = report::MIN_CORRELATION_ROWS,
                "insufficient data for a meaningful correlation"
            ),
            Correlation::Computed(r) => {
                tracing::info!(pearson = format!("{r:.4}"), "sentiment/volatility correlation");
            }
        }
        out.correlation = Some(correlation);

        if self.cfg.plot {
            let plot_path = self.cfg.plot_path();
            plot::render_scatter(&plot_path, &merged)?;
            tracing::info!(path = %plot_path.display(), "analysis plot saved");
            out.plot_path = Some(plot_path);
        }
        Ok(out)
    }
}
