//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use pt_core::domain::entities::user::{User, UserRole};
use pt_core::errors::{AuthError, DomainError};
use pt_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("failed to get id: {}", e)))?;

        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::Database(format!("failed to get role: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("invalid user id: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::Database(format!("failed to get username: {}", e)))?,
            password_hash: row.try_get("password_hash").map_err(|e| {
                DomainError::Database(format!("failed to get password_hash: {}", e))
            })?,
            role: UserRole::from_str(&role)
                .map_err(|e| DomainError::Database(format!("invalid users row: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE username = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("user query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("user query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, username, password_hash, role, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // Two concurrent registrations with the same username: the
                // loser of the unique-constraint race gets the standard
                // duplicate failure, not a server fault.
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::UsernameTaken)
                }
                _ => DomainError::Database(format!("failed to insert user: {}", e)),
            })?;

        Ok(user)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) FROM users WHERE username = ?";

        let count: i64 = sqlx::query_scalar(query)
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("user count failed: {}", e)))?;

        Ok(count > 0)
    }
}
