//! MySQL implementation of the OrderRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use pt_core::domain::entities::order::{Order, OrderPriority, OrderStatus};
use pt_core::errors::DomainError;
use pt_core::repositories::OrderRepository;

/// MySQL implementation of OrderRepository
pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    /// Create a new MySQL order repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Order entity
    fn row_to_order(row: &sqlx::mysql::MySqlRow) -> Result<Order, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("failed to get id: {}", e)))?;
        let priority: String = row
            .try_get("priority")
            .map_err(|e| DomainError::Database(format!("failed to get priority: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::Database(format!("failed to get status: {}", e)))?;

        Ok(Order {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("invalid order id: {}", e)))?,
            customer_name: row.try_get("customer_name").map_err(|e| {
                DomainError::Database(format!("failed to get customer_name: {}", e))
            })?,
            customer_email: row.try_get("customer_email").map_err(|e| {
                DomainError::Database(format!("failed to get customer_email: {}", e))
            })?,
            items_count: row
                .try_get("items_count")
                .map_err(|e| DomainError::Database(format!("failed to get items_count: {}", e)))?,
            priority: OrderPriority::from_str(&priority)
                .map_err(|e| DomainError::Database(format!("invalid orders row: {}", e)))?,
            status: OrderStatus::from_str(&status)
                .map_err(|e| DomainError::Database(format!("invalid orders row: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn list(
        &self,
        status: Option<OrderStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Order>, DomainError> {
        let rows = match status {
            Some(status) => {
                let query = r#"
                    SELECT id, customer_name, customer_email, items_count,
                           priority, status, created_at, updated_at
                    FROM orders
                    WHERE status = ?
                    ORDER BY created_at DESC
                    LIMIT ? OFFSET ?
                "#;
                sqlx::query(query)
                    .bind(status.as_str())
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = r#"
                    SELECT id, customer_name, customer_email, items_count,
                           priority, status, created_at, updated_at
                    FROM orders
                    ORDER BY created_at DESC
                    LIMIT ? OFFSET ?
                "#;
                sqlx::query(query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::Database(format!("order query failed: {}", e)))?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn count(&self, status: Option<OrderStatus>) -> Result<u64, DomainError> {
        let count: i64 = match status {
            Some(status) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = ?")
                    .bind(status.as_str())
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM orders")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::Database(format!("order count failed: {}", e)))?;

        Ok(count as u64)
    }

    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let query = r#"
            INSERT INTO orders (id, customer_name, customer_email, items_count,
                                priority, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(order.id.to_string())
            .bind(&order.customer_name)
            .bind(&order.customer_email)
            .bind(order.items_count)
            .bind(order.priority.as_str())
            .bind(order.status.as_str())
            .bind(order.created_at)
            .bind(order.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("failed to insert order: {}", e)))?;

        Ok(order)
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, DomainError> {
        let query = r#"
            SELECT id, customer_name, customer_email, items_count,
                   priority, status, created_at, updated_at
            FROM orders
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("order query failed: {}", e)))?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Order".to_string(),
            })?;

        let mut order = Self::row_to_order(&row)?;
        order.set_status(status);

        sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ?")
            .bind(order.status.as_str())
            .bind(order.updated_at)
            .bind(order.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("failed to update order: {}", e)))?;

        Ok(order)
    }
}
