use std::sync::Arc;

use anyhow::{Context, Result as AnyhowResult};
use tokio::net::TcpListener;
use tracing::{error, info};

use super::routes::create_router;
use super::state::AppState;
use crate::config::Settings;
use crate::database::pool::connect_pool;

pub async fn start_http_server(settings: Arc<Settings>) -> AnyhowResult<()> {
    info!("Initializing database pool");
    let pool = match connect_pool(&settings).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to initialize database pool: {}", e);
            return Err(e);
        }
    };

    let state = AppState::new(pool, Arc::clone(&settings));
    let app = create_router(state);

    let listener = TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.server_addr))?;
    info!("HTTP server listening on {}", settings.server_addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    info!("HTTP server has been shut down");
    Ok(())
}
