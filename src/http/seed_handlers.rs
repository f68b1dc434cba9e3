use axum::extract::State;
use axum::Json;
use tracing::info;

use super::error::ApiError;
use super::state::AppState;
use crate::seed::sample_accounts::{self, ClearOutcome, DataStatus, SeedOutcome};
use crate::seed::schema::init_schema;

/// Create the dev schema if missing, then load the sample fixture.
pub async fn create_sample_accounts(
    State(state): State<AppState>,
) -> Result<Json<SeedOutcome>, ApiError> {
    init_schema(&state.pool).await?;
    let outcome = sample_accounts::create_sample_accounts(&state.pool).await?;
    info!("Sample data request: {}", outcome.message);
    Ok(Json(outcome))
}

pub async fn clear_all_data(State(state): State<AppState>) -> Result<Json<ClearOutcome>, ApiError> {
    let outcome = sample_accounts::clear_all_data(&state.pool).await?;
    Ok(Json(outcome))
}

pub async fn data_status(State(state): State<AppState>) -> Result<Json<DataStatus>, ApiError> {
    let status = sample_accounts::data_status(&state.pool).await?;
    Ok(Json(status))
}
