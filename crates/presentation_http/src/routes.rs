//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Autocomplete API (v1)
        .route("/v1/suggestions", get(handlers::suggestions::suggest))
        // Nearest-stop API (v1)
        .route("/v1/stops/nearest", post(handlers::stops::nearest_stop))
        // Attach state
        .with_state(state)
}
