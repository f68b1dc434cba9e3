use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use super::state::AppState;
use crate::constants::{DEFAULT_MATCH_LIMIT, MAX_BATCH_QUERIES, MAX_MATCH_LIMIT};
use crate::database::MatchResult;

#[derive(Debug, Deserialize)]
pub struct SearchTestParams {
    pub query: String,
    #[serde(default)]
    pub show_all: bool,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_MATCH_LIMIT
}

#[derive(Debug, Serialize)]
pub struct SearchTestResponse {
    pub query: String,
    pub best_match: Option<MatchResult>,
    pub all_matches: Vec<MatchResult>,
    pub total_matches: usize,
    pub high_confidence_match: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchHealthResponse {
    pub status: &'static str,
    pub trigram_support: bool,
    pub confidence_threshold: f32,
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BatchQueryOutcome {
    pub query: String,
    pub match_found: bool,
    pub best_match: Option<MatchResult>,
}

#[derive(Debug, Serialize)]
pub struct BatchTestResponse {
    pub batch_results: Vec<BatchQueryOutcome>,
    pub total_queries: usize,
    pub matches_found: usize,
}

pub async fn test_search(
    State(state): State<AppState>,
    Query(params): Query<SearchTestParams>,
) -> Json<SearchTestResponse> {
    info!(
        "Received search request - query: {}, show_all: {}, limit: {}",
        params.query, params.show_all, params.limit
    );

    let limit = params.limit.clamp(1, MAX_MATCH_LIMIT);
    let service = state.search_service();

    let best_match = service.find_best_match(&params.query).await;
    let all_matches = if params.show_all {
        service.find_all_matches(&params.query, limit).await
    } else {
        Vec::new()
    };

    let high_confidence_match = best_match.is_some();
    Json(SearchTestResponse {
        query: params.query,
        total_matches: all_matches.len(),
        best_match,
        all_matches,
        high_confidence_match,
    })
}

pub async fn search_health(State(state): State<AppState>) -> Json<SearchHealthResponse> {
    let service = state.search_service();
    let trigram_support = service.trigram_support().await;

    Json(SearchHealthResponse {
        status: if trigram_support { "healthy" } else { "error" },
        trigram_support,
        confidence_threshold: service.confidence_threshold(),
        checked_at: Utc::now(),
    })
}

/// Best-match summary for a list of raw names. Blank entries are
/// skipped rather than reported as misses.
pub async fn batch_test(
    State(state): State<AppState>,
    Json(queries): Json<Vec<String>>,
) -> Result<Json<BatchTestResponse>, ApiError> {
    if queries.len() > MAX_BATCH_QUERIES {
        return Err(ApiError::BadRequest(format!(
            "Maximum {MAX_BATCH_QUERIES} queries allowed per batch"
        )));
    }

    let total_queries = queries.len();
    let service = state.search_service();
    let mut batch_results = Vec::with_capacity(total_queries);

    for query in queries {
        let best_match = {
            let trimmed = query.trim();
            if trimmed.is_empty() {
                continue;
            }
            service.find_best_match(trimmed).await
        };
        batch_results.push(BatchQueryOutcome {
            query,
            match_found: best_match.is_some(),
            best_match,
        });
    }

    let matches_found = batch_results.iter().filter(|r| r.match_found).count();
    Ok(Json(BatchTestResponse {
        batch_results,
        total_queries,
        matches_found,
    }))
}
