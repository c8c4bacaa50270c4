//! WASM bindings for URL signing.

use wasm_bindgen::prelude::*;

use crate::Result;

/// Sign an operation path, returning the URL-safe token.
///
/// An empty key raises a JS `Error` instead of yielding an empty token.
#[wasm_bindgen]
pub fn thumbor_sign(key: &str, message: &str) -> std::result::Result<String, JsError> {
    sign_token(key, message).map_err(|e| JsError::new(&e.to_string()))
}

/// Verify a token against an operation path (constant-time comparison).
#[wasm_bindgen]
pub fn thumbor_verify(key: &str, message: &str, token: &str) -> bool {
    crate::verify(message.as_bytes(), key.as_bytes(), token).is_ok()
}

fn sign_token(key: &str, message: &str) -> Result<String> {
    crate::sign(message.as_bytes(), key.as_bytes())
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;
    use crate::CryptoError;

    #[test]
    fn test_thumbor_sign_known_vector() {
        let token = thumbor_sign("secret_key", "300x300/http://myUrl/myimage.jpg");
        assert_eq!(token.ok().as_deref(), Some("dDRIn5qUtwPceuMImU2cCkEGRec="));
    }

    #[test]
    fn test_empty_key_is_an_error() {
        // JsError can only be built on a wasm32 target, so check the inner result.
        assert_eq!(sign_token("", "300x300/a.jpg"), Err(CryptoError::EmptyKey));
    }

    #[test]
    fn test_thumbor_verify() {
        let token = "dDRIn5qUtwPceuMImU2cCkEGRec=";
        assert!(thumbor_verify("secret_key", "300x300/http://myUrl/myimage.jpg", token));
        assert!(!thumbor_verify("secret_key", "300x301/http://myUrl/myimage.jpg", token));
        assert!(!thumbor_verify("", "300x300/http://myUrl/myimage.jpg", token));
    }
}
