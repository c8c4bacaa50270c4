//! URL signing for Thumbor image servers.
//!
//! This crate provides:
//! - HMAC-SHA1 signing of operation paths into URL-safe tokens
//! - Token verification with constant-time comparison
//!
//! Tokens use the URL-safe base64 alphabet and keep their `=` padding, which
//! is what Thumbor expects when it recomputes the signature.
//!
//! # Example
//!
//! ```
//! use thumbor_crypto::sign;
//!
//! let token = sign(b"http://myUrl/myimage.jpg", b"secret_key").unwrap();
//! assert_eq!(token, "Vmtcp9WWg_QGB_UahYp2zHni4Xc=");
//! ```

#![warn(missing_docs)]

mod hmac_impl;
mod timing;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use hmac_impl::{hmac_sha1, sign, verify, DIGEST_LEN, TOKEN_LEN};
pub use timing::constant_time_compare;
pub use error::{CryptoError, Result};
