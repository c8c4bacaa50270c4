//! Constant-time comparison for signature checks.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time.
///
/// Used when checking a presented token against a freshly computed digest,
/// so the comparison does not leak how many leading bytes matched.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_digests() {
        let digest = crate::hmac_sha1(b"key", b"300x300/a.jpg").unwrap();
        assert!(constant_time_compare(&digest, &digest));
    }

    #[test]
    fn test_different_digests() {
        let a = crate::hmac_sha1(b"key", b"300x300/a.jpg").unwrap();
        let b = crate::hmac_sha1(b"key", b"300x200/a.jpg").unwrap();
        assert!(!constant_time_compare(&a, &b));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_compare(b"token=", b"token"));
    }
}
