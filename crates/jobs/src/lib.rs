pub mod customer_cleanup;
pub mod heartbeat;
pub mod log_line;
pub mod low_stock_restock;
pub mod order_reminders;
pub mod runner;

pub use customer_cleanup::CustomerCleanupJob;
pub use heartbeat::HeartbeatJob;
pub use low_stock_restock::LowStockRestockJob;
pub use order_reminders::OrderReminderJob;
pub use runner::{HousekeepingJob, JobOutcome, JobReport, JobRunner};
