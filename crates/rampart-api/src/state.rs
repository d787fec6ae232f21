//! Shared application state for the HTTP layer.

use std::sync::Arc;

use rampart_core::GameState;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The game
/// store is owned by whoever builds the state, which keeps tests free to
/// construct as many independent stores as they need.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The placement store shared by every request.
    pub game: Arc<GameState>,
}

impl AppState {
    /// Create application state around an existing store.
    pub const fn new(game: Arc<GameState>) -> Self {
        Self { game }
    }
}
