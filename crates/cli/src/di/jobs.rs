use super::UseCases;
use crm_housekeeping_domain::Config;
use crm_housekeeping_infrastructure::activity_log::FileActivityLog;
use crm_housekeeping_jobs::{CustomerCleanupJob, HeartbeatJob, LowStockRestockJob, OrderReminderJob};
use std::sync::Arc;

/// One job per task, each writing to its own activity log file.
pub struct Jobs {
    pub cleanup_customers: CustomerCleanupJob,
    pub order_reminders: OrderReminderJob,
    pub restock: LowStockRestockJob,
    pub heartbeat: HeartbeatJob,
}

impl Jobs {
    pub fn new(config: &Config, use_cases: &UseCases) -> Self {
        Self {
            cleanup_customers: CustomerCleanupJob::new(
                use_cases.cleanup_customers.clone(),
                Arc::new(FileActivityLog::new(&config.cleanup.log_file)),
                use_cases.clock.clone(),
            ),
            order_reminders: OrderReminderJob::new(
                use_cases.order_reminders.clone(),
                Arc::new(FileActivityLog::new(&config.reminders.log_file)),
                use_cases.clock.clone(),
            ),
            restock: LowStockRestockJob::new(
                use_cases.restock.clone(),
                Arc::new(FileActivityLog::new(&config.stock.log_file)),
                use_cases.clock.clone(),
            ),
            heartbeat: HeartbeatJob::new(
                use_cases.check_health.clone(),
                Arc::new(FileActivityLog::new(&config.heartbeat.log_file)),
                use_cases.clock.clone(),
            ),
        }
    }
}
