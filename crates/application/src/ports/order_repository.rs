use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_housekeeping_domain::{DomainError, Order, OrderItem, OrderReminder};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order together with its items. The items' `order_id` is
    /// ignored and replaced with the new order's id.
    async fn create(&self, order: &Order, items: &[OrderItem]) -> Result<Order, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Orders placed at or after `since`, newest first
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<OrderReminder>, DomainError>;

    async fn delete_all(&self) -> Result<u64, DomainError>;
}
