//! User entity representing a registered account in the PackTrack system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Access role carried on the user record and inside token claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Warehouse administrator
    Admin,
    /// Packing-station operator
    Packer,
}

impl UserRole {
    /// String form used for database storage and token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Packer => "packer",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "packer" => Ok(UserRole::Packer),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a registered account
///
/// The username is immutable after creation and matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name, unique across the system
    pub username: String,

    /// Salted bcrypt digest; never serialized into a response
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Access role
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(username: String, password_hash: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }

    /// Checks if the user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(
            "packer1".to_string(),
            "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            UserRole::Packer,
        );

        assert_eq!(user.username, "packer1");
        assert_eq!(user.role, UserRole::Packer);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("packer".parse::<UserRole>().unwrap(), UserRole::Packer);
        assert!("supervisor".parse::<UserRole>().is_err());

        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Packer.to_string(), "packer");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let json = serde_json::to_string(&UserRole::Packer).unwrap();
        assert_eq!(json, "\"packer\"");
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::new(
            "admin".to_string(),
            "$2b$12$secret-digest".to_string(),
            UserRole::Admin,
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret-digest"));
        assert!(json.contains("\"username\":\"admin\""));
    }
}
