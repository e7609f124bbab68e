//! Sentivol correlates financial-news sentiment with same-day stock volatility.
//!
//! Overview
//! - Searches headlines per company through a news connector and scores each
//!   title with a [`SentimentScorer`](sentivol_core::SentimentScorer).
//! - Averages scores per (company, day), fetches padded daily bars for every
//!   ticker in one batched price call and computes `(high - low) / low`.
//! - Maps each news day to the first trading day on or after it and inner-joins
//!   sentiment with that day's volatility.
//! - Persists the merged rows as CSV, computes a Pearson coefficient when at
//!   least three rows exist and renders an SVG scatter with a regression line.
//!
//! Failure model
//! - A failing company is skipped; no articles at all is fatal (`NoArticles`).
//! - A failed price fetch degrades to an empty merge, which skips the artifacts.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sentivol::Sentivol;
//! use sentivol_mock::MockConnector;
//!
//! let sv = Sentivol::builder()
//!     .with_connector(Arc::new(MockConnector::new()))
//!     .build()?;
//! let report = sv.run(chrono::Utc::now().date_naive()).await?;
//! println!("{:?}", report.correlation);
//! ```
#![warn(missing_docs)]

mod core;
/// Scatter plot rendering.
pub mod plot;
/// CSV persistence, preview and correlation gating.
pub mod report;
mod stages;

pub(crate) use crate::core::tag_err;
pub use crate::core::{Sentivol, SentivolBuilder};
pub use sentivol_core::{
    CompanyTicker, Correlation, DateWindow, MergedRow, RunReport, SentivolConfig, SentivolError,
};
