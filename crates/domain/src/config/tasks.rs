use crate::inactivity::DEFAULT_INACTIVITY_DAYS;
use crate::product::{DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_RESTOCK_INCREMENT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Customers without an order in this many days are deleted.
    #[serde(default = "default_inactivity_days")]
    pub inactivity_days: u32,

    #[serde(default = "default_cleanup_log")]
    pub log_file: String,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            inactivity_days: default_inactivity_days(),
            log_file: default_cleanup_log(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemindersConfig {
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    #[serde(default = "default_reminders_log")]
    pub log_file: String,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            log_file: default_reminders_log(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StockConfig {
    #[serde(default = "default_threshold")]
    pub threshold: i64,

    #[serde(default = "default_increment")]
    pub increment: i64,

    #[serde(default = "default_stock_log")]
    pub log_file: String,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            increment: default_increment(),
            log_file: default_stock_log(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeartbeatConfig {
    #[serde(default = "default_heartbeat_log")]
    pub log_file: String,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            log_file: default_heartbeat_log(),
        }
    }
}

fn default_inactivity_days() -> u32 {
    DEFAULT_INACTIVITY_DAYS
}

fn default_cleanup_log() -> String {
    "/tmp/customer_cleanup_log.txt".to_string()
}

fn default_lookback_days() -> u32 {
    7
}

fn default_reminders_log() -> String {
    "/tmp/order_reminders_log.txt".to_string()
}

fn default_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_increment() -> i64 {
    DEFAULT_RESTOCK_INCREMENT
}

fn default_stock_log() -> String {
    "/tmp/low_stock_updates_log.txt".to_string()
}

fn default_heartbeat_log() -> String {
    "/tmp/crm_heartbeat_log.txt".to_string()
}
