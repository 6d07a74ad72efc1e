use crate::ports::{Clock, OrderRepository};
use chrono::{DateTime, Days, NaiveTime, Utc};
use crm_housekeeping_domain::{DomainError, OrderReminder};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: collect orders placed within the lookback window so their
/// customers can be reminded. The window opens at midnight UTC,
/// `lookback_days` calendar days before today.
pub struct SendOrderRemindersUseCase {
    order_repo: Arc<dyn OrderRepository>,
    clock: Arc<dyn Clock>,
    lookback_days: u32,
}

impl SendOrderRemindersUseCase {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        clock: Arc<dyn Clock>,
        lookback_days: u32,
    ) -> Self {
        Self {
            order_repo,
            clock,
            lookback_days,
        }
    }

    pub async fn execute(&self) -> Result<Vec<OrderReminder>, DomainError> {
        let since = self.window_start(self.clock.now())?;
        let reminders = self.order_repo.find_placed_since(since).await?;

        for reminder in &reminders {
            debug!(
                order_id = reminder.order_id,
                email = %reminder.customer_email,
                "Order reminder queued"
            );
        }

        info!(
            count = reminders.len(),
            lookback_days = self.lookback_days,
            "Pending order reminders collected"
        );
        Ok(reminders)
    }

    fn window_start(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
        now.date_naive()
            .checked_sub_days(Days::new(u64::from(self.lookback_days)))
            .map(|day| day.and_time(NaiveTime::MIN).and_utc())
            .ok_or_else(|| {
                DomainError::ConfigError(format!(
                    "reminder lookback of {} days is out of range",
                    self.lookback_days
                ))
            })
    }
}
