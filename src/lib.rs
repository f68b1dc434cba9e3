mod cli;
mod config;
mod constants;
mod database;
mod http;
mod search_operations;
mod search_service;
mod seed;

#[cfg(test)]
mod tests;

// Re-export everything that main.rs needs
pub use cli::parse_args;
pub use config::{MatchThresholds, Settings};
pub use constants::*;
pub use database::pool::{connect_pool, test_connection};
pub use database::{ConfidenceBand, MatchResult, MatchSource};
pub use http::start_http_server::start_http_server;
pub use http::{create_router, AppState};
pub use search_service::FuzzySearchService;
pub use seed::sample_accounts::{clear_all_data, create_sample_accounts, data_status};
pub use seed::schema::init_schema;
