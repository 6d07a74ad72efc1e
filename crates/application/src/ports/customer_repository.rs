use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_housekeeping_domain::{Customer, DomainError};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a customer and return it with its assigned id
    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Number of customers with no order placed at or after `cutoff`
    async fn count_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Delete every customer without an order placed at or after `cutoff`.
    /// Runs as one transaction; returns the number of customers removed.
    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;

    async fn delete_all(&self) -> Result<u64, DomainError>;
}
