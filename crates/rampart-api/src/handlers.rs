//! REST endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/tower/place` | Append a placement, return the full sequence |
//! | `GET` | `/state` | Every stored placement |
//! | `POST` | `/reset` | Discard every placement |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use rampart_types::{PlacementAccepted, ResetAck, StateView, TowerPlacement};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /tower/place
// ---------------------------------------------------------------------------

/// Record a tower placement.
///
/// The body is decoded before the store is touched, so a rejected request
/// never mutates state. Decoding runs in two steps: axum checks the content
/// type and JSON syntax, then the value is mapped onto [`TowerPlacement`]
/// with path tracking so a failure names the offending field.
pub async fn place_tower(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PlacementAccepted>, ApiError> {
    let placement = decode_placement(payload).inspect_err(|err| {
        warn!(error = %err, "Rejected tower placement");
    })?;

    let tower_id = placement.tower_id.clone();
    let (x, y) = (placement.x, placement.y);
    let current = state.game.append(placement).await;

    info!(tower_id = %tower_id, x, y, total = current.len(), "Tower placed");

    Ok(Json(PlacementAccepted::new(current)))
}

fn decode_placement(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<TowerPlacement, ApiError> {
    let Json(body) = payload?;
    Ok(serde_path_to_error::deserialize(body)?)
}

// ---------------------------------------------------------------------------
// GET /state
// ---------------------------------------------------------------------------

/// Return every stored placement as `{"towers": [...]}`.
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateView> {
    let towers = state.game.snapshot().await;
    Json(StateView { towers })
}

// ---------------------------------------------------------------------------
// POST /reset
// ---------------------------------------------------------------------------

/// Clear the board.
pub async fn reset_state(State(state): State<Arc<AppState>>) -> Json<ResetAck> {
    let removed = state.game.reset().await;
    info!(removed, "Game state reset");
    Json(ResetAck::new(removed))
}
