//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for signing operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur while signing or verifying a URL token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Signing was attempted without a key
    #[error("Cannot sign with an empty key")]
    EmptyKey,

    /// Token is not valid URL-safe base64
    #[error("Invalid signature format: {0}")]
    InvalidSignature(String),

    /// Signature verification failed
    #[error("Signature mismatch")]
    SignatureMismatch,
}
