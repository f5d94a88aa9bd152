//! Order entity representing a customer order queued for packing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Packing state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Queued, no packer has picked it up yet
    Waiting,
    /// Currently being packed
    InProgress,
    /// Packing finished
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Waiting => "waiting",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(OrderStatus::Waiting),
            "in_progress" => Ok(OrderStatus::InProgress),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

/// Handling priority of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Low,
    Medium,
    High,
}

impl OrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::Low => "low",
            OrderPriority::Medium => "medium",
            OrderPriority::High => "high",
        }
    }
}

impl FromStr for OrderPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(OrderPriority::Low),
            "medium" => Ok(OrderPriority::Medium),
            "high" => Ok(OrderPriority::High),
            other => Err(format!("unknown order priority: {}", other)),
        }
    }
}

/// Customer order queued for packing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for the order
    pub id: Uuid,

    /// Customer display name
    pub customer_name: String,

    /// Customer contact email
    pub customer_email: String,

    /// Number of items to pack
    pub items_count: i32,

    /// Handling priority
    pub priority: OrderPriority,

    /// Current packing state
    pub status: OrderStatus,

    /// Timestamp when the order was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the order was last updated
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order in the waiting state
    pub fn new(
        customer_name: String,
        customer_email: String,
        items_count: i32,
        priority: OrderPriority,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_name,
            customer_email,
            items_count,
            priority,
            status: OrderStatus::Waiting,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the order to a new status
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_starts_waiting() {
        let order = Order::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            3,
            OrderPriority::High,
        );

        assert_eq!(order.status, OrderStatus::Waiting);
        assert_eq!(order.priority, OrderPriority::High);
        assert_eq!(order.items_count, 3);
    }

    #[test]
    fn test_set_status_touches_updated_at() {
        let mut order = Order::new(
            "Jane Smith".to_string(),
            "jane@example.com".to_string(),
            1,
            OrderPriority::Medium,
        );

        let before = order.updated_at;
        order.set_status(OrderStatus::InProgress);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert!(order.updated_at >= before);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            OrderStatus::Waiting,
            OrderStatus::InProgress,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("packed".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
