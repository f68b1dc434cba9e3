use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use super::search_handlers;
use super::seed_handlers;
use super::state::AppState;
use crate::database::pool::test_connection;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    database: &'static str,
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Account fuzzy-match API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = test_connection(&state.pool).await;
    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" },
        service: "account-matcher",
        database: if connected { "connected" } else { "unreachable" },
    })
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/fuzzy-search/test", get(search_handlers::test_search))
        .route("/fuzzy-search/health", get(search_handlers::search_health))
        .route("/fuzzy-search/batch-test", post(search_handlers::batch_test))
        .route(
            "/sample-data/create-sample-accounts",
            post(seed_handlers::create_sample_accounts),
        )
        .route(
            "/sample-data/clear-all-data",
            delete(seed_handlers::clear_all_data),
        )
        .route("/sample-data/status", get(seed_handlers::data_status))
        .layer(cors)
        .with_state(state)
}
