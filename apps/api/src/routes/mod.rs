pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matches::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match results + analytics
        .route("/api/v1/matches", post(handlers::handle_run_matching))
        .route("/api/v1/matches/ingest", post(handlers::handle_ingest))
        .route(
            "/api/v1/matches/current/analytics",
            get(handlers::handle_current_analytics),
        )
        .route(
            "/api/v1/matches/current/:index",
            get(handlers::handle_match_details),
        )
        // Narrative formatting
        .route("/api/v1/narrative", post(handlers::handle_format_narrative))
        .with_state(state)
}
