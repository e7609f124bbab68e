use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type shared by every sentivol crate.
///
/// Provider failures are recoverable inside a run; configuration, empty news
/// and artifact failures end it. See [`SentivolError::is_fatal`].
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SentivolError {
    /// No registered connector serves the requested role.
    #[error("no connector serves {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "news").
        capability: String,
    },

    /// A provider response could not be interpreted.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration value.
    #[error("invalid configuration: {0}")]
    InvalidArg(String),

    /// A provider call failed.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The provider has no data for the request.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "price history for AAPL".
        what: String,
    },

    /// Nothing in a batched call could be served; holds each failure.
    #[error("all requests failed: {0:?}")]
    AllFailed(Vec<SentivolError>),

    /// No news article was fetched for any configured company.
    #[error("no news articles were fetched for any company")]
    NoArticles,

    /// Filesystem failure while writing run artifacts.
    #[error("io error: {0}")]
    Io(String),

    /// Failure while serializing the merged dataset.
    #[error("csv error: {0}")]
    Csv(String),

    /// Failure while rendering the analysis plot.
    #[error("plot error: {0}")]
    Plot(String),
}

impl SentivolError {
    /// `Unsupported` for a role such as `"news"`.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// `Connector` failure attributed to `connector`.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` describing what was missing.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if this error ends a pipeline run instead of degrading it.
    ///
    /// Provider failures are recoverable (the affected company or ticker simply
    /// contributes no rows); configuration and artifact-writing failures are not.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Connector { .. }
            | Self::NotFound { .. }
            | Self::Data(_)
            | Self::Unsupported { .. } => false,
            Self::AllFailed(inner) => inner.iter().any(Self::is_fatal),
            _ => true,
        }
    }

    /// Unwrap nested `AllFailed` lists into their leaf errors.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

impl From<std::io::Error> for SentivolError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
