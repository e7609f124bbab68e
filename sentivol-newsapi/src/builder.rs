use reqwest::Client;
use sentivol_core::SentivolError;
use url::Url;

use crate::NewsApiConnector;

/// Builder for [`NewsApiConnector`].
#[derive(Debug, Default)]
pub struct NewsApiConnectorBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    client: Option<Client>,
}

impl NewsApiConnectorBuilder {
    /// Set the API credential sent with every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the endpoint root (e.g. a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Reuse an existing HTTP client.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the API key is missing or blank, or the base URL
    /// does not parse.
    pub fn build(self) -> Result<NewsApiConnector, SentivolError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SentivolError::InvalidArg("missing news API key".into()))?;
        let raw = self
            .base_url
            .unwrap_or_else(|| NewsApiConnector::DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&raw)
            .map_err(|e| SentivolError::InvalidArg(format!("news base url '{raw}': {e}")))?;
        // Relative joins replace the last path segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(NewsApiConnector {
            client: self.client.unwrap_or_default(),
            base_url,
            api_key,
        })
    }
}
