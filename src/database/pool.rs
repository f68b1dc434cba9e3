use std::time::Duration;

use anyhow::{Context, Result as AnyhowResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info};

use crate::config::Settings;

/// Connections are recycled after an hour to avoid stale sessions.
const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(3600);

pub async fn connect_pool(settings: &Settings) -> AnyhowResult<PgPool> {
    info!(
        "Connecting to database (max {} connections)",
        settings.db_max_connections
    );
    let pool = PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .max_lifetime(MAX_CONNECTION_LIFETIME)
        .connect(&settings.database_url)
        .await
        .context("Failed to connect to database")?;
    Ok(pool)
}

pub async fn test_connection(pool: &PgPool) -> bool {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(value) => value == 1,
        Err(e) => {
            error!("Database connection check failed: {}", e);
            false
        }
    }
}
