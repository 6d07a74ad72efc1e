use async_trait::async_trait;
use crm_housekeeping_application::ports::HealthProbe;
use crm_housekeeping_domain::DomainError;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

pub struct SqliteHealthProbe {
    pool: SqlitePool,
}

impl SqliteHealthProbe {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for SqliteHealthProbe {
    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        debug!("Database answered health probe");
        Ok(())
    }
}
