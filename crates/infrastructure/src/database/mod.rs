use crm_housekeeping_domain::config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

fn connect_options(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqliteConnectOptions, sqlx::Error> {
    // Cascading deletes from customers to orders and items rely on foreign keys.
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs)))
}

pub async fn create_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(connect_options(database_url, cfg)?)
        .await?;

    if cfg.run_migrations {
        run_migrations(&pool, Path::new(&cfg.migrations_dir)).await?;
    }

    Ok(pool)
}

/// Pool that connects on first use. Used when the database could not be
/// opened at startup, so each task still runs and records the failure.
pub fn create_lazy_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    Ok(SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(cfg.busy_timeout_secs))
        .connect_lazy_with(connect_options(database_url, cfg)?))
}

pub async fn run_migrations(pool: &SqlitePool, dir: &Path) -> Result<(), sqlx::Error> {
    let migrator = Migrator::new(dir).await?;
    migrator.run(pool).await?;
    info!(dir = %dir.display(), "Database migrations applied");
    Ok(())
}
