//! Builder and signer for Thumbor image URLs
//!
//! This crate assembles the operation path understood by a
//! [Thumbor](https://www.thumbor.org/) server (resize, crop alignment,
//! smart cropping, trimming, filters, format and GIF-to-video conversion)
//! and signs it with the server's security key. It never touches the
//! network; the output is a plain string.
//!
//! # Features
//!
//! - **Signed or unsafe URLs**: HMAC-SHA1 tokens when a key is configured,
//!   the `unsafe` marker otherwise
//! - **Canonical ordering**: operations serialize in the order the server
//!   parses them, regardless of call order
//! - **File configuration**: load the server URL and key from TOML
//!
//! # Example
//!
//! ```rust
//! use thumbor_url::{Filter, Thumbor, TrimOption};
//!
//! let thumbor = Thumbor::with_secret_key("http://localhost/", "secret_key")?;
//!
//! let url = thumbor
//!     .build_image("http://myUrl/myimage.jpg")
//!     .trim(TrimOption::TopLeft)
//!     .resize(100, 200)
//!     .filter(Filter::grayscale())
//!     .to_full_url()?;
//! assert!(url.starts_with("http://localhost/"));
//! assert!(url.ends_with("/trim/100x200/filters:grayscale()/http://myUrl/myimage.jpg"));
//!
//! // Paths assembled by hand can be signed directly
//! let signed = thumbor.build_signed_url("http://myUrl/myimage.jpg")?;
//! assert_eq!(signed, "/Vmtcp9WWg_QGB_UahYp2zHni4Xc=/http://myUrl/myimage.jpg");
//! # Ok::<(), thumbor_url::ThumborError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod options;

pub use client::{SecretKey, SigningMode, Thumbor};
pub use config::ThumborConfig;
pub use error::{Result, ThumborError};
pub use image::ThumborImage;
pub use options::{Filter, GifVideoOption, HorizontalAlign, ImageFormat, TrimOption, VerticalAlign};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::Thumbor;
    pub use crate::config::ThumborConfig;
    pub use crate::error::{Result, ThumborError};
    pub use crate::image::ThumborImage;
    pub use crate::options::{
        Filter, GifVideoOption, HorizontalAlign, ImageFormat, TrimOption, VerticalAlign,
    };
}
