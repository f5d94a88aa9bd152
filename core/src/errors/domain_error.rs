//! Domain-specific error types for authentication and related operations
//!
//! External wording for these failures is decided in the presentation
//! layer; the variants here deliberately keep distinct internal causes
//! (unknown user vs wrong password, expired vs malformed token) collapsed
//! to what a caller is allowed to learn.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Registration attempted with a username that is already taken
    #[error("Username already exists")]
    UsernameTaken,

    /// Login failed; covers both unknown username and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    /// Malformed encoding, bad signature, or unacceptable claims
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Unified error type crossing the domain boundary
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
