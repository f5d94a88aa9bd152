//! User repository trait defining the interface for credential persistence.
//!
//! This is the Credential Store contract: usernames, password hashes, and
//! roles. Implementations live in the infrastructure layer; an in-memory
//! mock is provided here for tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Username lookups are exact and case-sensitive. `create` must enforce
/// username uniqueness: when two concurrent registrations race, exactly one
/// succeeds and the other observes [`crate::errors::AuthError::UsernameTaken`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::UsernameTaken))` - Username in use
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Check whether a username is already registered
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;
}

/// In-memory implementation of UserRepository for testing
pub mod mock {
    use super::*;
    use crate::errors::AuthError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository backed by a HashMap
    #[derive(Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<Uuid, User>>>,
    }

    impl MockUserRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.username == username).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.get(&id).cloned())
        }

        async fn create(&self, user: User) -> Result<User, DomainError> {
            let mut users = self.users.write().await;

            // Same semantics as the database unique constraint
            if users.values().any(|u| u.username == user.username) {
                return Err(AuthError::UsernameTaken.into());
            }

            users.insert(user.id, user.clone());
            Ok(user)
        }

        async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
            let users = self.users.read().await;
            Ok(users.values().any(|u| u.username == username))
        }
    }
}
