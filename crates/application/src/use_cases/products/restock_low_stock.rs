use crate::ports::ProductRepository;
use crm_housekeeping_domain::{DomainError, Product, RestockPolicy};
use std::sync::Arc;
use tracing::info;

pub struct RestockLowStockProductsUseCase {
    product_repo: Arc<dyn ProductRepository>,
    policy: RestockPolicy,
}

impl RestockLowStockProductsUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>, policy: RestockPolicy) -> Self {
        Self {
            product_repo,
            policy,
        }
    }

    pub async fn execute(&self) -> Result<Vec<Product>, DomainError> {
        let updated = self.product_repo.restock_below(self.policy).await?;
        info!(
            updated = updated.len(),
            threshold = self.policy.threshold,
            increment = self.policy.increment,
            "Low-stock products restocked"
        );
        Ok(updated)
    }
}
