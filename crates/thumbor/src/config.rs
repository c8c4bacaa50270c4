//! Factory configuration
//!
//! A [`ThumborConfig`] can be built in code or loaded from a TOML file:
//!
//! ```toml
//! server_url = "https://thumbor.example.com/"
//! secret_key = "my-security-key"
//! ```

use crate::error::{Result, ThumborError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

/// Configuration for a [`Thumbor`](crate::Thumbor) factory
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumborConfig {
    /// Absolute URL of the Thumbor server, e.g. `http://localhost:8888/`
    pub server_url: String,
    /// Security key shared with the server; absent or empty means unsafe URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

impl fmt::Debug for ThumborConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumborConfig")
            .field("server_url", &self.server_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ThumborConfig {
    /// Create an unsigned configuration for `server_url`
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            secret_key: None,
        }
    }

    /// Builder-style method to set the secret key
    #[must_use]
    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    /// Returns [`ThumborError::ConfigParse`] for malformed TOML and the
    /// [`ThumborConfig::validate`] errors for a bad server URL.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`ThumborError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`ThumborConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// True when URLs will carry a signature
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.secret_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`ThumborError::InvalidServerUrl`] or
    /// [`ThumborError::Configuration`] if `server_url` is not an absolute URL
    /// usable as a base.
    pub fn validate(&self) -> Result<()> {
        parse_server_url(&self.server_url).map(|_| ())
    }
}

/// Parse and check a server base URL.
pub(crate) fn parse_server_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|source| ThumborError::InvalidServerUrl {
        url: input.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(ThumborError::config(format!(
            "server URL '{input}' cannot be used as a base URL"
        )));
    }

    Ok(url)
}
