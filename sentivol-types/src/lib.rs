//! Shared data model, configuration and report envelopes for the sentivol pipeline.
#![warn(missing_docs)]

mod config;
mod error;
mod model;
mod reports;
mod request;

pub use config::{COMPANY_PLACEHOLDER, SentivolConfig, TICKER_PLACEHOLDER};
pub use error::SentivolError;
pub use model::{CompanyTicker, DailySentiment, MergedRow, NewsArticle, PricePoint, ScoredArticle};
pub use reports::{CompanyFetch, Correlation, NewsReport, PriceReport, RunReport};
pub use request::{DateWindow, NewsRequest, PriceRequest};
