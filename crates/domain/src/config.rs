pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod tasks;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, MAX_WINDOW_DAYS};
pub use tasks::{CleanupConfig, HeartbeatConfig, RemindersConfig, StockConfig};
