use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    /// Apply pending migrations on startup. Disable when the schema is owned
    /// by another deployment step.
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            migrations_dir: default_migrations_dir(),
            run_migrations: default_true(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

fn default_db_path() -> String {
    "./crm.db".to_string()
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_connections() -> u32 {
    2
}

fn default_busy_timeout_secs() -> u64 {
    30
}
