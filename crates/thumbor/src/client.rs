//! Thumbor URL factory

use crate::config::{parse_server_url, ThumborConfig};
use crate::error::Result;
use crate::image::ThumborImage;
use std::fmt;
use std::sync::Arc;
use thumbor_crypto::constant_time_compare;
use tracing::{debug, trace};
use url::Url;

/// Marker placed where the signature would go when signing is disabled
const UNSAFE_MARKER: &str = "unsafe";

/// Shared secret used to sign operation paths
#[derive(Clone)]
pub struct SecretKey(Arc<[u8]>);

impl SecretKey {
    /// Key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        constant_time_compare(&self.0, &other.0)
    }
}

impl Eq for SecretKey {}

/// How URLs produced by a factory are authenticated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningMode {
    /// No key: URLs carry the `unsafe` marker
    Unsafe,
    /// URLs carry an HMAC-SHA1 token computed with the key
    Signed(SecretKey),
}

impl SigningMode {
    /// Pick the mode for an optional key; an empty key selects [`SigningMode::Unsafe`]
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some(key) if !key.is_empty() => Self::Signed(SecretKey(Arc::from(key.as_bytes()))),
            _ => Self::Unsafe,
        }
    }

    /// True when URLs carry a signature
    #[must_use]
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Signed(_))
    }
}

/// Factory for Thumbor image URLs
///
/// Holds the server URL and the signing mode. Cheap to clone and safe to
/// share between threads; each [`ThumborImage`] it creates keeps its own
/// handle.
#[derive(Debug, Clone)]
pub struct Thumbor {
    server_url: Arc<Url>,
    mode: SigningMode,
}

impl Thumbor {
    /// Create a factory producing unsigned (`unsafe`) URLs
    ///
    /// # Errors
    /// Returns [`ThumborError::InvalidServerUrl`](crate::ThumborError::InvalidServerUrl)
    /// or [`ThumborError::Configuration`](crate::ThumborError::Configuration) if
    /// `server_url` is not an absolute URL usable as a base.
    pub fn new(server_url: &str) -> Result<Self> {
        Self::build(server_url, None)
    }

    /// Create a factory signing URLs with `secret_key`
    ///
    /// The key must match the `SECURITY_KEY` configured on the server. An
    /// empty key falls back to unsafe URLs.
    ///
    /// # Errors
    /// Returns [`ThumborError::InvalidServerUrl`](crate::ThumborError::InvalidServerUrl)
    /// or [`ThumborError::Configuration`](crate::ThumborError::Configuration) if
    /// `server_url` is not an absolute URL usable as a base.
    pub fn with_secret_key(server_url: &str, secret_key: &str) -> Result<Self> {
        Self::build(server_url, Some(secret_key))
    }

    /// Create a factory from a [`ThumborConfig`]
    ///
    /// # Errors
    /// Returns [`ThumborError::InvalidServerUrl`](crate::ThumborError::InvalidServerUrl)
    /// or [`ThumborError::Configuration`](crate::ThumborError::Configuration) if
    /// `server_url` is not an absolute URL usable as a base.
    pub fn from_config(config: &ThumborConfig) -> Result<Self> {
        Self::build(&config.server_url, config.secret_key.as_deref())
    }

    fn build(server_url: &str, secret_key: Option<&str>) -> Result<Self> {
        let server_url = parse_server_url(server_url)?;
        let mode = SigningMode::from_key(secret_key);

        debug!(
            host = server_url.host_str().unwrap_or_default(),
            signed = mode.is_signed(),
            "Thumbor factory created"
        );

        Ok(Self {
            server_url: Arc::new(server_url),
            mode,
        })
    }

    /// Server base URL as normalised by the URL parser
    #[must_use]
    pub fn server_url(&self) -> &str {
        self.server_url.as_str()
    }

    /// Signing mode chosen at construction
    #[must_use]
    pub fn mode(&self) -> &SigningMode {
        &self.mode
    }

    /// Start building a URL for `image_url`
    ///
    /// The image URL is used verbatim; it is neither validated nor escaped.
    #[must_use]
    pub fn build_image(&self, image_url: impl Into<String>) -> ThumborImage {
        ThumborImage::new(self.clone(), image_url.into())
    }

    /// Sign an operation path assembled by the caller
    ///
    /// `path` must not start with `/`, e.g.
    /// `trim/100x200/filters:grayscale()/http://myserver/myimage.jpg`.
    ///
    /// - Unsafe mode: `{server_url}unsafe{path}`, concatenated literally.
    /// - Signed mode: `/{token}/{path}`, relative to the server.
    ///
    /// # Errors
    /// Returns [`ThumborError::Signing`](crate::ThumborError::Signing) if the
    /// signer rejects the key.
    pub fn build_signed_url(&self, path: &str) -> Result<String> {
        match &self.mode {
            SigningMode::Unsafe => Ok(self.unsafe_url(path)),
            SigningMode::Signed(key) => Ok(format!("/{}", sign_path(key, path)?)),
        }
    }

    /// Alias of [`Thumbor::build_signed_url`]
    ///
    /// # Errors
    /// Same as [`Thumbor::build_signed_url`].
    pub fn build_encrypted_url(&self, path: &str) -> Result<String> {
        self.build_signed_url(path)
    }

    /// Relative form used by [`ThumborImage::to_url`]: `{token}/{path}`
    /// when signed, the unsafe URL otherwise.
    pub(crate) fn relative_url(&self, path: &str) -> Result<String> {
        match &self.mode {
            SigningMode::Unsafe => Ok(self.unsafe_url(path)),
            SigningMode::Signed(key) => sign_path(key, path),
        }
    }

    /// Absolute form used by [`ThumborImage::to_full_url`].
    pub(crate) fn absolute_url(&self, path: &str) -> Result<String> {
        match &self.mode {
            SigningMode::Unsafe => Ok(self.unsafe_url(path)),
            SigningMode::Signed(key) => {
                Ok(format!("{}{}", self.server_url(), sign_path(key, path)?))
            }
        }
    }

    fn unsafe_url(&self, path: &str) -> String {
        trace!(path, "Unsigned operation path");
        format!("{}{UNSAFE_MARKER}{path}", self.server_url())
    }
}

fn sign_path(key: &SecretKey, path: &str) -> Result<String> {
    let token = thumbor_crypto::sign(path.as_bytes(), key.as_bytes())?;
    trace!(path, "Signed operation path");
    Ok(format!("{token}/{path}"))
}
