use crate::ports::{Clock, CustomerRepository};
use crm_housekeeping_domain::{DomainError, InactivityPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: delete customers with no order inside the inactivity window.
/// Zero matches is a successful run returning `Ok(0)`.
pub struct CleanupInactiveCustomersUseCase {
    customer_repo: Arc<dyn CustomerRepository>,
    clock: Arc<dyn Clock>,
    policy: InactivityPolicy,
}

impl CleanupInactiveCustomersUseCase {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        clock: Arc<dyn Clock>,
        policy: InactivityPolicy,
    ) -> Self {
        Self {
            customer_repo,
            clock,
            policy,
        }
    }

    pub async fn execute(&self) -> Result<u64, DomainError> {
        let cutoff = self.policy.cutoff(self.clock.now())?;

        let matched = self.customer_repo.count_inactive_since(cutoff).await?;
        debug!(matched, cutoff = %cutoff, "Inactive customers selected");

        let deleted = self.customer_repo.delete_inactive_since(cutoff).await?;
        info!(
            deleted,
            inactivity_days = self.policy.days(),
            cutoff = %cutoff,
            "Inactive customers cleaned up"
        );
        Ok(deleted)
    }
}
