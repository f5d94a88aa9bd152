//! Order repository trait for the packing queue.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::{Order, OrderStatus};
use crate::errors::DomainError;

/// Repository trait for Order persistence operations
///
/// Listings are newest-first by creation time.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List orders, optionally filtered by status
    async fn list(
        &self,
        status: Option<OrderStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Order>, DomainError>;

    /// Count orders matching the same filter as [`OrderRepository::list`]
    async fn count(&self, status: Option<OrderStatus>) -> Result<u64, DomainError>;

    /// Persist a new order
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Update the status of an existing order
    ///
    /// # Returns
    /// * `Ok(Order)` - The updated order
    /// * `Err(DomainError::NotFound)` - No order with the given id
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, DomainError>;
}

/// In-memory implementation of OrderRepository for testing
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock order repository backed by a HashMap
    #[derive(Default)]
    pub struct MockOrderRepository {
        orders: Arc<RwLock<HashMap<Uuid, Order>>>,
    }

    impl MockOrderRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn list(
            &self,
            status: Option<OrderStatus>,
            limit: i64,
            offset: i64,
        ) -> Result<Vec<Order>, DomainError> {
            let orders = self.orders.read().await;
            let mut matching: Vec<Order> = orders
                .values()
                .filter(|o| status.map_or(true, |s| o.status == s))
                .cloned()
                .collect();
            matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            Ok(matching
                .into_iter()
                .skip(offset.max(0) as usize)
                .take(limit.max(0) as usize)
                .collect())
        }

        async fn count(&self, status: Option<OrderStatus>) -> Result<u64, DomainError> {
            let orders = self.orders.read().await;
            Ok(orders
                .values()
                .filter(|o| status.map_or(true, |s| o.status == s))
                .count() as u64)
        }

        async fn create(&self, order: Order) -> Result<Order, DomainError> {
            let mut orders = self.orders.write().await;
            orders.insert(order.id, order.clone());
            Ok(order)
        }

        async fn update_status(
            &self,
            id: Uuid,
            status: OrderStatus,
        ) -> Result<Order, DomainError> {
            let mut orders = self.orders.write().await;
            match orders.get_mut(&id) {
                Some(order) => {
                    order.set_status(status);
                    Ok(order.clone())
                }
                None => Err(DomainError::NotFound {
                    resource: "Order".to_string(),
                }),
            }
        }
    }
}
