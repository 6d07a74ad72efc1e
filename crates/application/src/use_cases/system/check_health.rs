use crate::ports::HealthProbe;
use std::sync::Arc;
use tracing::warn;

pub struct CheckHealthUseCase {
    probe: Arc<dyn HealthProbe>,
}

impl CheckHealthUseCase {
    pub fn new(probe: Arc<dyn HealthProbe>) -> Self {
        Self { probe }
    }

    /// Returns whether the backing store answered. A failed probe is a
    /// reportable state, not an error.
    pub async fn execute(&self) -> bool {
        match self.probe.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Health probe failed");
                false
            }
        }
    }
}
