//! Configuration modules

mod auth;
mod database;
mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use thiserror::Error;

/// Errors raised while loading configuration at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Complete application configuration
///
/// Loaded once in `main` and handed to each layer explicitly; nothing else
/// in the codebase reads the environment for these values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    ///
    /// Fails when a required value (the JWT signing secret) is absent,
    /// so the server never starts in a state where it would issue
    /// unverifiable tokens.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
        })
    }
}
