//! HTTP handler layer for the Rampart tower placement service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /tower/place`** -- append a [`TowerPlacement`] to the shared
//!   store and echo back the full sequence
//! - **`GET /state`** -- read every stored placement
//! - **`POST /reset`** -- clear the board
//!
//! # Architecture
//!
//! The store is an explicitly owned [`GameState`] constructed by the caller
//! and injected through [`AppState`]. Handlers never hold the store's guard
//! across anything but the store call itself.
//!
//! [`TowerPlacement`]: rampart_types::TowerPlacement
//! [`GameState`]: rampart_core::GameState

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{bind, serve, shutdown_signal, start_server, ServerError};
pub use state::AppState;
