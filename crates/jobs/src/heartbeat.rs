use crate::log_line::heartbeat_stamp;
use crate::runner::{record, HousekeepingJob, JobOutcome};
use async_trait::async_trait;
use crm_housekeeping_application::ports::{ActivityLog, Clock};
use crm_housekeeping_application::use_cases::CheckHealthUseCase;
use std::sync::Arc;

/// Appends a liveness line. An unreachable database is noted in the line
/// and reported as a task failure.
pub struct HeartbeatJob {
    health: Arc<CheckHealthUseCase>,
    activity_log: Arc<dyn ActivityLog>,
    clock: Arc<dyn Clock>,
}

impl HeartbeatJob {
    pub fn new(
        health: Arc<CheckHealthUseCase>,
        activity_log: Arc<dyn ActivityLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            health,
            activity_log,
            clock,
        }
    }
}

#[async_trait]
impl HousekeepingJob for HeartbeatJob {
    fn name(&self) -> &'static str {
        "heartbeat"
    }

    async fn run_once(&self) -> JobOutcome {
        let ts = heartbeat_stamp(self.clock.now());

        if self.health.execute().await {
            record(self.activity_log.as_ref(), vec![format!("{} CRM is alive", ts)], None).await
        } else {
            let line = format!("{} CRM is alive (database unreachable)", ts);
            record(
                self.activity_log.as_ref(),
                vec![line],
                Some("database unreachable".to_string()),
            )
            .await
        }
    }
}
