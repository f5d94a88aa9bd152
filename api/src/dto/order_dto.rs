//! Order request and response types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pt_core::domain::entities::order::{Order, OrderPriority, OrderStatus};

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListOrdersQuery {
    pub status: Option<OrderStatus>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, max = 128))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(range(min = 1))]
    pub items_count: i32,
    /// Defaults to medium when omitted
    pub priority: Option<OrderPriority>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: u64,
}
