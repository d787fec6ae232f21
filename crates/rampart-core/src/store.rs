//! The tower placement store.
//!
//! [`GameState`] owns the ordered sequence of [`TowerPlacement`] records for
//! the lifetime of the process. It is constructed once at startup, wrapped in
//! [`Arc`](std::sync::Arc) and handed to the HTTP layer.
//!
//! # Concurrency
//!
//! A single [`tokio::sync::Mutex`] guards the sequence. Append, snapshot and
//! reset each take the guard exactly once and release it before returning,
//! so an append is never partially visible and every snapshot is a prefix of
//! the completed appends at the moment it ran.

use rampart_types::TowerPlacement;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory, insertion-ordered store of tower placements.
#[derive(Debug, Default)]
pub struct GameState {
    towers: Mutex<Vec<TowerPlacement>>,
}

impl GameState {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a placement and return the full sequence after the addition.
    ///
    /// The returned copy is taken under the same guard as the push, so it
    /// always ends with `placement` even when other appends race with this
    /// one.
    pub async fn append(&self, placement: TowerPlacement) -> Vec<TowerPlacement> {
        let mut towers = self.towers.lock().await;
        debug!(
            tower_id = %placement.tower_id,
            x = placement.x,
            y = placement.y,
            position = towers.len(),
            "Appending placement"
        );
        towers.push(placement);
        towers.clone()
    }

    /// Copy of the current sequence, oldest first.
    pub async fn snapshot(&self) -> Vec<TowerPlacement> {
        self.towers.lock().await.clone()
    }

    /// Discard every placement. Returns how many were removed.
    pub async fn reset(&self) -> usize {
        let mut towers = self.towers.lock().await;
        let removed = towers.len();
        towers.clear();
        removed
    }

    /// Number of stored placements.
    pub async fn len(&self) -> usize {
        self.towers.lock().await.len()
    }

    /// Whether no placement has been stored.
    pub async fn is_empty(&self) -> bool {
        self.towers.lock().await.is_empty()
    }
}
