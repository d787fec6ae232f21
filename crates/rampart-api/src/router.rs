//! Axum router construction.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so the browser table can poll from its own origin.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `POST /tower/place` -- append a placement
/// - `GET /state` -- read all placements
/// - `POST /reset` -- clear all placements
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/tower/place", post(handlers::place_tower))
        .route("/state", get(handlers::get_state))
        .route("/reset", post(handlers::reset_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
