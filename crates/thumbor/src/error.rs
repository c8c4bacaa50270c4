//! Error types for the Thumbor URL builder

use thiserror::Error;
use thumbor_crypto::CryptoError;

/// Result type alias for URL building
pub type Result<T> = std::result::Result<T, ThumborError>;

/// Errors raised while configuring a factory or signing a URL
#[derive(Error, Debug)]
pub enum ThumborError {
    /// Server URL could not be parsed
    #[error("Invalid server URL '{url}': {source}")]
    InvalidServerUrl {
        /// The rejected input
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Signing the operation path failed
    #[error("Signing error: {0}")]
    Signing(#[from] CryptoError),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ThumborError {
    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this error was raised while building a factory
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::InvalidServerUrl { .. }
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::ConfigParse(_) => true,
            Self::Signing(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_server_url_display() {
        let err = ThumborError::InvalidServerUrl {
            url: "not a url".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(err.to_string().contains("not a url"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_signing_error_from_crypto() {
        let err: ThumborError = CryptoError::EmptyKey.into();
        assert!(matches!(err, ThumborError::Signing(CryptoError::EmptyKey)));
        assert!(!err.is_configuration());
    }
}
