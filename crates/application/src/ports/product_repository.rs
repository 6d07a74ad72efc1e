use async_trait::async_trait;
use crm_housekeeping_domain::{DomainError, Product, RestockPolicy};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<Product, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Apply `policy` to every low-stock product in one transaction and
    /// return the products with their new stock levels.
    async fn restock_below(&self, policy: RestockPolicy) -> Result<Vec<Product>, DomainError>;

    async fn delete_all(&self) -> Result<u64, DomainError>;
}
