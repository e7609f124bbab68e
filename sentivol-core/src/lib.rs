//! sentivol-core
//!
//! Core traits and pure transformations shared across the sentivol workspace.
//!
//! - `types`: re-exports of the data model from `sentivol-types`.
//! - `connector`: the `SentivolConnector` trait and capability provider traits.
//! - `sentiment`: headline scoring and per-day aggregation.
//! - `timeseries`: trading-day alignment and the sentiment/volatility join.
//! - `stats`: correlation and least-squares helpers.
#![warn(missing_docs)]

/// Connector capability traits and the primary `SentivolConnector` interface.
pub mod connector;
/// Headline scoring and daily aggregation.
pub mod sentiment;
/// Correlation and regression helpers.
pub mod stats;
/// Trading-day alignment and merge utilities.
pub mod timeseries;
pub mod types;

pub use connector::{NewsProvider, PriceProvider, SentivolConnector};
pub use sentiment::{SentimentScorer, VaderScorer, aggregate_daily, score_articles};
pub use stats::{LinearFit, linear_fit, pearson};
pub use timeseries::align::TradingDateIndex;
pub use timeseries::merge::{attach_companies, merge_inner};
pub use types::*;
