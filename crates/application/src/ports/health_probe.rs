use async_trait::async_trait;
use crm_housekeeping_domain::DomainError;

#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> Result<(), DomainError>;
}
