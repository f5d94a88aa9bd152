//! JWT authentication configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default bearer token lifetime: 24 hours
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;

/// JWT authentication configuration
///
/// The secret and lifetime are process-wide and read exactly once at
/// startup; rotating the secret invalidates every outstanding token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Bearer token lifetime in seconds
    pub token_ttl_seconds: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    /// Set the token lifetime in seconds
    pub fn with_token_ttl(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    /// Create from environment variables.
    ///
    /// `JWT_SECRET` is mandatory: a server started without it would mint
    /// tokens nothing can verify, so startup fails instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("JWT_SECRET"))?;

        let token_ttl_seconds = match std::env::var("TOKEN_TTL_SECONDS") {
            Ok(raw) => raw.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                var: "TOKEN_TTL_SECONDS",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_SECONDS,
        };

        Ok(Self {
            secret,
            token_ttl_seconds,
        })
    }
}
