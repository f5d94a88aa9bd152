//! Bearer token issuance and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainResult, TokenError};

/// Token service configuration
///
/// Built once at startup from the loaded application config and injected
/// into [`TokenService::new`]; the secret is never read from the
/// environment anywhere else.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared HMAC signing secret
    pub secret: String,

    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, token_ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_seconds,
        }
    }
}

/// Service minting and verifying signed bearer tokens
///
/// Tokens are HS256 JWTs carrying `{sub, username, role, iat, exp, iss}`.
/// They are self-contained: verification never touches the database, and
/// there is no revocation list, so a token stays valid until its expiry.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl_seconds: i64,
}

impl TokenService {
    /// Creates a new token service from an explicit configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;
        // Expiry is exact: a token is rejected the moment now >= exp
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
            token_ttl_seconds: config.token_ttl_seconds,
        }
    }

    /// Issues a signed bearer token for the given user
    pub fn issue(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new(user.id, &user.username, user.role, self.token_ttl_seconds);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Verifies a bearer token and returns its claims
    ///
    /// Rejects on signature mismatch, malformed encoding, unknown issuer,
    /// or expiry. The expiry boundary is exclusive of `iat + ttl`, so a
    /// token issued with a zero lifetime is already dead.
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken,
            },
        )?;

        // jsonwebtoken treats exp == now as still live; the contract here
        // does not.
        if data.claims.is_expired() {
            return Err(TokenError::TokenExpired.into());
        }

        Ok(data.claims)
    }

    /// Configured token lifetime in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;
    use crate::errors::DomainError;

    fn test_user(username: &str, role: UserRole) -> User {
        User::new(username.to_string(), "$2b$12$digest".to_string(), role)
    }

    fn service(secret: &str, ttl: i64) -> TokenService {
        TokenService::new(TokenConfig::new(secret, ttl))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = service("test-secret", 3600);
        let user = test_user("packer1", UserRole::Packer);

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.username, "packer1");
        assert_eq!(claims.role, UserRole::Packer);
    }

    #[test]
    fn test_zero_ttl_token_rejected_immediately() {
        let service = service("test-secret", 0);
        let user = test_user("packer1", UserRole::Packer);

        let token = service.issue(&user).unwrap();
        let err = service.verify(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }

    #[test]
    fn test_token_rejected_under_different_secret() {
        let issuer = service("secret-a", 3600);
        let verifier = service("secret-b", 3600);
        let user = test_user("admin", UserRole::Admin);

        let token = issuer.issue(&user).unwrap();
        let err = verifier.verify(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = service("test-secret", 3600);
        assert!(service.verify("").is_err());
        assert!(service.verify("garbage").is_err());
        assert!(service.verify("a.b.c").is_err());
    }

    #[test]
    fn test_tampered_payload_invalidates_signature() {
        let service = service("test-secret", 3600);
        let packer = service.issue(&test_user("packer1", UserRole::Packer)).unwrap();
        let admin = service.issue(&test_user("admin", UserRole::Admin)).unwrap();

        // Payload from one token spliced with the signature of another:
        // the signature no longer covers the claims, so it must fail.
        let packer_parts: Vec<&str> = packer.split('.').collect();
        let admin_parts: Vec<&str> = admin.split('.').collect();
        let forged = format!(
            "{}.{}.{}",
            admin_parts[0], admin_parts[1], packer_parts[2]
        );

        let err = service.verify(&forged).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }
}
