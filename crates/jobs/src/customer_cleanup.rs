use crate::log_line::stamp;
use crate::runner::{record, HousekeepingJob, JobOutcome};
use async_trait::async_trait;
use crm_housekeeping_application::ports::{ActivityLog, Clock};
use crm_housekeeping_application::use_cases::CleanupInactiveCustomersUseCase;
use std::sync::Arc;
use tracing::{error, info};

/// Fixed marker written when the cleanup could not complete.
pub const CLEANUP_ERROR_MARKER: &str = "Error: Failed to execute cleanup script";

/// Deletes inactive customers and appends exactly one line to the cleanup
/// log: the deleted count, or the error marker.
pub struct CustomerCleanupJob {
    cleanup: Arc<CleanupInactiveCustomersUseCase>,
    activity_log: Arc<dyn ActivityLog>,
    clock: Arc<dyn Clock>,
}

impl CustomerCleanupJob {
    pub fn new(
        cleanup: Arc<CleanupInactiveCustomersUseCase>,
        activity_log: Arc<dyn ActivityLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cleanup,
            activity_log,
            clock,
        }
    }
}

#[async_trait]
impl HousekeepingJob for CustomerCleanupJob {
    fn name(&self) -> &'static str {
        "cleanup-customers"
    }

    async fn run_once(&self) -> JobOutcome {
        let ts = stamp(self.clock.now());

        let (line, task_error) = match self.cleanup.execute().await {
            Ok(deleted) => {
                info!(deleted, "Customer cleanup completed");
                (format!("{} Deleted {} inactive customers", ts, deleted), None)
            }
            Err(e) => {
                error!(error = %e, "Customer cleanup failed");
                (format!("{} {}", ts, CLEANUP_ERROR_MARKER), Some(e.to_string()))
            }
        };

        record(self.activity_log.as_ref(), vec![line], task_error).await
    }
}
