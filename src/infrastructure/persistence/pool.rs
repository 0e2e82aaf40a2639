//! Connection pool setup and schema migrations.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::Config;

/// Embedded migrations from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Connects to PostgreSQL, retrying with exponential backoff.
///
/// Makes one initial attempt plus up to `config.db_connect_retries` retries
/// (200ms, 400ms, 800ms, ... capped at 5s, with jitter).
///
/// # Errors
///
/// Returns the last connection error once retries are exhausted.
pub async fn connect_with_retry(config: &Config) -> Result<PgPool, sqlx::Error> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries);

    let mut attempt = 0u32;

    Retry::spawn(strategy, || {
        attempt += 1;
        let current = attempt;
        let options = options.clone();

        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| {
                    tracing::warn!(attempt = current, error = %e, "Database connection failed");
                })
        }
    })
    .await
}

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
