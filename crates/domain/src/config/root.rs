use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::tasks::{CleanupConfig, HeartbeatConfig, RemindersConfig, StockConfig};

const LOCAL_CONFIG_PATH: &str = "crm-housekeeping.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/crm-housekeeping/config.toml";

/// Upper bound for day windows; keeps `now - days` representable.
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Main configuration structure for the housekeeping tasks
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Inactive customer cleanup
    #[serde(default)]
    pub cleanup: CleanupConfig,

    /// Pending order reminders
    #[serde(default)]
    pub reminders: RemindersConfig,

    /// Low-stock restocking
    #[serde(default)]
    pub stock: StockConfig,

    #[serde(default)]
    pub heartbeat: HeartbeatConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. crm-housekeeping.toml in current directory
    /// 3. /etc/crm-housekeeping/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        for (key, days) in [
            ("cleanup.inactivity_days", self.cleanup.inactivity_days),
            ("reminders.lookback_days", self.reminders.lookback_days),
        ] {
            if days == 0 || days > MAX_WINDOW_DAYS {
                return Err(ConfigError::Validation(format!(
                    "{} must be between 1 and {}",
                    key, MAX_WINDOW_DAYS
                )));
            }
        }
        if self.stock.increment <= 0 {
            return Err(ConfigError::Validation(
                "stock.increment must be positive".to_string(),
            ));
        }

        for (section, log_file) in [
            ("cleanup", &self.cleanup.log_file),
            ("reminders", &self.reminders.log_file),
            ("stock", &self.stock.log_file),
            ("heartbeat", &self.heartbeat.log_file),
        ] {
            if log_file.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{}.log_file cannot be empty",
                    section
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
