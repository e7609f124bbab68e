//! Re-export of the data model from `sentivol-types`.
// Consolidated re-exports so downstream crates can depend on `sentivol-core` only

pub use sentivol_types::{COMPANY_PLACEHOLDER, SentivolConfig, SentivolError, TICKER_PLACEHOLDER};

pub use sentivol_types::{
    CompanyTicker, DailySentiment, MergedRow, NewsArticle, PricePoint, ScoredArticle,
};

pub use sentivol_types::{CompanyFetch, Correlation, NewsReport, PriceReport, RunReport};

pub use sentivol_types::{DateWindow, NewsRequest, PriceRequest};
