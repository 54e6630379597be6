// src/web/mod.rs
// Request-Service: JSON API in front of the analyzer

pub mod api;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Create the Request-Service router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness probe
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/analyze", post(api::analyze))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
