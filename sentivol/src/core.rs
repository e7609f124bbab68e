use std::sync::Arc;

use sentivol_core::connector::{NewsProvider, PriceProvider};
use sentivol_core::{SentimentScorer, SentivolConfig, SentivolConnector, SentivolError, VaderScorer};

/// Orchestrator that runs the analysis stages against registered connectors.
pub struct Sentivol {
    pub(crate) connectors: Vec<Arc<dyn SentivolConnector>>,
    pub(crate) scorer: Arc<dyn SentimentScorer>,
    pub(crate) cfg: SentivolConfig,
}

/// Builder for constructing a `Sentivol` orchestrator.
pub struct SentivolBuilder {
    connectors: Vec<Arc<dyn SentivolConnector>>,
    scorer: Option<Arc<dyn SentimentScorer>>,
    cfg: SentivolConfig,
}

impl Default for SentivolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SentivolBuilder {
    /// Create a builder with the default configuration and the VADER scorer.
    ///
    /// Starts with no connectors; register at least one news-capable and one
    /// price-capable connector via [`Self::with_connector`]. A single connector
    /// may serve both.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            scorer: None,
            cfg: SentivolConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// For each capability the first registered connector advertising it is used.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn SentivolConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the headline scorer.
    #[must_use]
    pub fn scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Replace the run configuration.
    #[must_use]
    pub fn config(mut self, cfg: SentivolConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configuration is invalid or no registered
    /// connector provides news or prices.
    pub fn build(self) -> Result<Sentivol, SentivolError> {
        self.cfg.validate()?;
        if !self.connectors.iter().any(|c| c.as_news_provider().is_some()) {
            return Err(SentivolError::InvalidArg(
                "no news-capable connector registered; add one via with_connector(...)".into(),
            ));
        }
        if !self.connectors.iter().any(|c| c.as_price_provider().is_some()) {
            return Err(SentivolError::InvalidArg(
                "no price-capable connector registered; add one via with_connector(...)".into(),
            ));
        }
        Ok(Sentivol {
            connectors: self.connectors,
            scorer: self
                .scorer
                .unwrap_or_else(|| Arc::new(VaderScorer::new())),
            cfg: self.cfg,
        })
    }
}

impl Sentivol {
    /// Start building a new `Sentivol` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use sentivol::Sentivol;
    /// use sentivol_newsapi::NewsApiConnector;
    /// use sentivol_yfinance::YfConnector;
    ///
    /// let sv = Sentivol::builder()
    ///     .with_connector(Arc::new(NewsApiConnector::new(key)?))
    ///     .with_connector(Arc::new(YfConnector::new_default()))
    ///     .build()?;
    /// let report = sv.run(chrono::Utc::now().date_naive()).await?;
    /// ```
    #[must_use]
    pub fn builder() -> SentivolBuilder {
        SentivolBuilder::new()
    }

    /// The configuration this orchestrator runs with.
    #[must_use]
    pub const fn config(&self) -> &SentivolConfig {
        &self.cfg
    }

    pub(crate) fn news_provider(&self) -> Result<(&'static str, &dyn NewsProvider), SentivolError> {
        self.connectors
            .iter()
            .find_map(|c| c.as_news_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| SentivolError::unsupported("news"))
    }

    pub(crate) fn price_provider(
        &self,
    ) -> Result<(&'static str, &dyn PriceProvider), SentivolError> {
        self.connectors
            .iter()
            .find_map(|c| c.as_price_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| SentivolError::unsupported("prices"))
    }
}

/// Attribute a provider failure to `connector` unless it already names its source.
pub(crate) fn tag_err(connector: &str, e: SentivolError) -> SentivolError {
    match e {
        e @ (SentivolError::NotFound { .. }
        | SentivolError::Connector { .. }
        | SentivolError::AllFailed(_)) => e,
        other => SentivolError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}
