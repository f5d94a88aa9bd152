//! Value objects returned by the authentication flows.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Result of a successful registration or login: a freshly minted bearer
/// token plus the public fields of the account it identifies.
///
/// The user's password hash is excluded by the entity's serialization
/// rules, so this value is safe to hand to the presentation layer as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,

    /// The authenticated account
    pub user: User,
}

impl AuthResponse {
    pub fn new(token: String, user: User) -> Self {
        Self { token, user }
    }
}
