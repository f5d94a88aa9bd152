//! Authentication request and response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pt_core::domain::entities::user::{User, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Defaults to packer when omitted
    pub role: Option<UserRole>,
}

/// Login carries no field constraints: a malformed attempt must fail the
/// same way as a wrong password, without hinting at credential policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public projection of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<pt_core::domain::value_objects::AuthResponse> for AuthResponse {
    fn from(response: pt_core::domain::value_objects::AuthResponse) -> Self {
        Self {
            user: UserResponse::from(&response.user),
            token: response.token,
        }
    }
}
