//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;

/// JWT issuer
pub const JWT_ISSUER: &str = "packtrack";

/// Claims structure for the JWT payload
///
/// Carries identity and role so downstream authorization needs no
/// database round-trip. Tokens are self-contained and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Login name of the subject
    pub username: String,

    /// Access role of the subject
    pub role: UserRole,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp (exclusive: the token is dead once now >= exp)
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for a bearer token expiring `ttl_seconds` from now
    pub fn new(user_id: Uuid, username: &str, role: UserRole, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "packer1", UserRole::Packer, 3600);

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.username, "packer1");
        assert_eq!(claims.role, UserRole::Packer);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.exp, claims.iat + 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_zero_ttl_claims_are_expired() {
        let claims = Claims::new(Uuid::new_v4(), "packer1", UserRole::Packer, 0);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_invalid_subject_rejected() {
        let mut claims = Claims::new(Uuid::new_v4(), "admin", UserRole::Admin, 60);
        claims.sub = "not-a-uuid".to_string();
        assert!(claims.user_id().is_err());
    }
}
