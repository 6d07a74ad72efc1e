use crate::errors::DomainError;
use chrono::{DateTime, Duration, SubsecRound, Utc};

pub const DEFAULT_INACTIVITY_DAYS: u32 = 365;

/// Classifies customers by the recency of their latest order.
///
/// A customer is inactive when it has no orders at all, or when its most
/// recent order is strictly older than the cutoff (`now - days`). An order
/// placed exactly at the cutoff keeps the customer.
///
/// The cutoff has whole-second resolution, the same as stored order dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityPolicy {
    days: u32,
}

impl InactivityPolicy {
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
        Duration::try_days(i64::from(self.days))
            .and_then(|window| now.checked_sub_signed(window))
            .map(|cutoff| cutoff.trunc_subsecs(0))
            .ok_or_else(|| {
                DomainError::ConfigError(format!(
                    "inactivity window of {} days is out of range",
                    self.days
                ))
            })
    }

    pub fn is_inactive(last_order_at: Option<DateTime<Utc>>, cutoff: DateTime<Utc>) -> bool {
        match last_order_at {
            None => true,
            Some(ts) => ts < cutoff,
        }
    }
}

impl Default for InactivityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INACTIVITY_DAYS)
    }
}
