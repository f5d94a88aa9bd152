//! Password hashing and verification.
//!
//! bcrypt with a fixed work factor; each digest embeds its own random salt,
//! so hashing the same input twice yields different digests and
//! verification needs no stored salt column.

use crate::errors::{DomainError, DomainResult};

/// bcrypt work factor. Fixed so verification cost is uniform across
/// deployments, which bounds brute-force throughput per guess.
pub const HASH_COST: u32 = 12;

/// Hash a plaintext password into a salted bcrypt digest.
pub fn hash(plaintext: &str) -> DomainResult<String> {
    bcrypt::hash(plaintext, HASH_COST)
        .map_err(|e| DomainError::Internal(format!("password hashing failed: {}", e)))
}

/// Verify a plaintext password against a stored digest.
///
/// Fails closed: a malformed digest yields `false`, never an error, so a
/// corrupt credential row behaves like a wrong password.
pub fn verify(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let digest = hash("pw123456").unwrap();
        assert!(verify("pw123456", &digest));
        assert!(!verify("pw123457", &digest));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash("packer123").unwrap();
        let second = hash("packer123").unwrap();
        assert_ne!(first, second);
        assert!(verify("packer123", &first));
        assert!(verify("packer123", &second));
    }

    #[test]
    fn test_malformed_digest_fails_closed() {
        assert!(!verify("pw123456", ""));
        assert!(!verify("pw123456", "not-a-bcrypt-digest"));
        assert!(!verify("pw123456", "$2b$12$truncated"));
    }
}
