//! Authentication service for registration and login flows.
//!
//! Coordinates the credential store, password hashing, and token issuance.
//! Failure semantics are deliberate: unknown-username and wrong-password
//! logins are indistinguishable to the caller, and a duplicate username is
//! the only registration failure a client can tell apart from a server
//! fault.

use std::sync::Arc;

use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password;
use crate::services::token_service::TokenService;

/// Authentication service generic over the credential store
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Register a new user and issue their first bearer token.
    ///
    /// The username must be free (exact, case-sensitive match). The check
    /// here is advisory; the store's unique constraint settles concurrent
    /// registrations, and a lost race surfaces as the same
    /// [`AuthError::UsernameTaken`].
    pub async fn register(
        &self,
        username: &str,
        plaintext_password: &str,
        role: UserRole,
    ) -> DomainResult<AuthResponse> {
        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UsernameTaken.into());
        }

        let password_hash = password::hash(plaintext_password)?;
        let user = self
            .user_repository
            .create(User::new(username.to_string(), password_hash, role))
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "registered new user");

        let token = self.token_service.issue(&user)?;
        Ok(AuthResponse::new(token, user))
    }

    /// Authenticate an existing user and issue a bearer token.
    ///
    /// Returns [`AuthError::InvalidCredentials`] for both an unknown
    /// username and a wrong password; callers must not be able to probe
    /// which usernames exist.
    pub async fn login(&self, username: &str, plaintext_password: &str) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !password::verify(plaintext_password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(user_id = %user.id, "login succeeded");

        let token = self.token_service.issue(&user)?;
        Ok(AuthResponse::new(token, user))
    }
}
