mod error;
mod routes;
mod search_handlers;
mod seed_handlers;
mod state;
pub mod start_http_server;

pub use routes::create_router;
pub use state::AppState;
