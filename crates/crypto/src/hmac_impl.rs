//! HMAC-SHA1 signing and URL-safe token encoding.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::{CryptoError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Length of an HMAC-SHA1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of an encoded token (padded base64 of [`DIGEST_LEN`] bytes).
pub const TOKEN_LEN: usize = 28;

/// Compute the raw HMAC-SHA1 digest of `message`.
///
/// # Arguments
/// * `key` - Secret key bytes
/// * `message` - Message to sign
///
/// # Errors
/// Returns [`CryptoError::EmptyKey`] when `key` is empty.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> Result<[u8; DIGEST_LEN]> {
    if key.is_empty() {
        return Err(CryptoError::EmptyKey);
    }

    // HMAC accepts keys of any length; only the empty key is rejected above.
    let mut mac = HmacSha1::new_from_slice(key).map_err(|_| CryptoError::EmptyKey)?;
    mac.update(message);

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}

/// Sign `message` with `key` and return the URL-safe token.
///
/// The token is the URL-safe base64 encoding (`-` and `_` instead of `+`
/// and `/`) of the HMAC-SHA1 digest, padding included. It is returned as-is
/// and must not be percent-encoded again.
///
/// # Errors
/// Returns [`CryptoError::EmptyKey`] when `key` is empty.
pub fn sign(message: &[u8], key: &[u8]) -> Result<String> {
    let digest = hmac_sha1(key, message)?;
    Ok(URL_SAFE.encode(digest))
}

/// Check that `token` is the signature of `message` under `key`.
///
/// # Returns
/// `Ok(())` if the token matches, `Err(CryptoError::SignatureMismatch)` otherwise
///
/// # Errors
/// Returns [`CryptoError::InvalidSignature`] for a token that is not base64,
/// [`CryptoError::EmptyKey`] for an empty key and
/// [`CryptoError::SignatureMismatch`] when the digests differ.
pub fn verify(message: &[u8], key: &[u8], token: &str) -> Result<()> {
    let provided = URL_SAFE
        .decode(token)
        .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
    let expected = hmac_sha1(key, message)?;

    if crate::constant_time_compare(&provided, &expected) {
        Ok(())
    } else {
        Err(CryptoError::SignatureMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sign_known_vector() {
        let token = sign(b"http://myUrl/myimage.jpg", b"secret_key").unwrap();
        assert_eq!(token, "Vmtcp9WWg_QGB_UahYp2zHni4Xc=");
    }

    #[test]
    fn test_sign_resize_vector() {
        let token = sign(b"300x300/http://myUrl/myimage.jpg", b"secret_key").unwrap();
        assert_eq!(token, "dDRIn5qUtwPceuMImU2cCkEGRec=");
    }

    #[test]
    fn test_token_keeps_padding() {
        let token = sign(b"anything", b"key").unwrap();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.ends_with('='));
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(sign(b"message", b""), Err(CryptoError::EmptyKey));
        assert_eq!(hmac_sha1(b"", b"message"), Err(CryptoError::EmptyKey));
    }

    #[test]
    fn test_hmac_sha1_length() {
        let digest = hmac_sha1(b"secret", b"hello world").unwrap();
        assert_eq!(digest.len(), DIGEST_LEN);
    }

    #[test]
    fn test_verify_match() {
        let token = sign(b"300x300/a.jpg", b"k").unwrap();
        assert!(verify(b"300x300/a.jpg", b"k", &token).is_ok());
    }

    #[test]
    fn test_verify_mismatch() {
        let token = sign(b"300x300/a.jpg", b"k").unwrap();
        assert_eq!(
            verify(b"300x301/a.jpg", b"k", &token),
            Err(CryptoError::SignatureMismatch)
        );
    }

    #[test]
    fn test_verify_garbage_token() {
        let result = verify(b"a.jpg", b"k", "not base64!");
        assert!(matches!(result, Err(CryptoError::InvalidSignature(_))));
    }

    proptest! {
        #[test]
        fn test_sign_is_deterministic(message in ".*", key in ".+") {
            let first = sign(message.as_bytes(), key.as_bytes()).unwrap();
            let second = sign(message.as_bytes(), key.as_bytes()).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert!(verify(message.as_bytes(), key.as_bytes(), &first).is_ok());
        }

        #[test]
        fn test_different_keys_differ(message in ".*", key in "[a-z]{1,16}") {
            let other = format!("{key}_2");
            let a = sign(message.as_bytes(), key.as_bytes()).unwrap();
            let b = sign(message.as_bytes(), other.as_bytes()).unwrap();
            prop_assert_ne!(a, b);
        }
    }
}
