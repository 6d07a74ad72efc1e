use crate::log_line::stamp;
use crate::runner::{record, HousekeepingJob, JobOutcome};
use async_trait::async_trait;
use crm_housekeeping_application::ports::{ActivityLog, Clock};
use crm_housekeeping_application::use_cases::SendOrderRemindersUseCase;
use std::sync::Arc;
use tracing::error;

pub struct OrderReminderJob {
    reminders: Arc<SendOrderRemindersUseCase>,
    activity_log: Arc<dyn ActivityLog>,
    clock: Arc<dyn Clock>,
}

impl OrderReminderJob {
    pub fn new(
        reminders: Arc<SendOrderRemindersUseCase>,
        activity_log: Arc<dyn ActivityLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reminders,
            activity_log,
            clock,
        }
    }
}

#[async_trait]
impl HousekeepingJob for OrderReminderJob {
    fn name(&self) -> &'static str {
        "order-reminders"
    }

    async fn run_once(&self) -> JobOutcome {
        let ts = stamp(self.clock.now());

        match self.reminders.execute().await {
            Ok(reminders) => {
                let mut lines = Vec::with_capacity(reminders.len() + 1);
                lines.push(format!("{} Processing {} pending orders", ts, reminders.len()));
                lines.extend(reminders.iter().map(|r| {
                    format!(
                        "{} Order ID: {}, Customer Email: {}, Order Date: {}",
                        ts, r.order_id, r.customer_email, r.order_date
                    )
                }));
                record(self.activity_log.as_ref(), lines, None).await
            }
            Err(e) => {
                error!(error = %e, "Order reminder collection failed");
                let lines = vec![format!("{} Error: {}", ts, e)];
                record(self.activity_log.as_ref(), lines, Some(e.to_string())).await
            }
        }
    }
}
