use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Settings;
use crate::search_service::FuzzySearchService;

/// Shared between handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: PgPool, settings: Arc<Settings>) -> Self {
        Self { pool, settings }
    }

    /// Request-scoped search service over the shared pool.
    pub fn search_service(&self) -> FuzzySearchService {
        FuzzySearchService::new(self.pool.clone(), self.settings.thresholds())
    }
}
