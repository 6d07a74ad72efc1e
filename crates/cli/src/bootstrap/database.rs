use crm_housekeeping_domain::config::DatabaseConfig;
use crm_housekeeping_infrastructure::database::{create_lazy_pool, create_pool};
use sqlx::SqlitePool;
use tracing::{error, info, warn};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let database_url = cfg.url();
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url, cfg).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={}, migrations={})",
        cfg.max_connections, cfg.run_migrations,
    );

    Ok(pool)
}

/// Like [`init_database`], but falls back to a lazily connecting pool so the
/// selected task still runs and logs its own failure line.
pub async fn init_database_or_lazy(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    match init_database(cfg).await {
        Ok(pool) => Ok(pool),
        Err(e) => {
            warn!(
                error = %e,
                "Database unavailable; continuing so the task can record the failure"
            );
            Ok(create_lazy_pool(&cfg.url(), cfg)?)
        }
    }
}
