//! Response envelopes for the HTTP routes.
//!
//! | Route | Envelope |
//! |-------|----------|
//! | `POST /tower/place` | [`PlacementAccepted`] |
//! | `GET /state` | [`StateView`] |
//! | `POST /reset` | [`ResetAck`] |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::placement::TowerPlacement;

/// Confirmation message returned by a successful placement.
pub const PLACEMENT_ACCEPTED_MESSAGE: &str = "Tower placed";

/// Confirmation message returned by a reset.
pub const RESET_MESSAGE: &str = "State reset";

/// Body of a successful `POST /tower/place`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlacementAccepted {
    /// Always [`PLACEMENT_ACCEPTED_MESSAGE`].
    pub message: String,
    /// Every placement held after this one was appended, oldest first.
    pub current: Vec<TowerPlacement>,
}

impl PlacementAccepted {
    /// Wrap the post-append sequence.
    pub fn new(current: Vec<TowerPlacement>) -> Self {
        Self {
            message: String::from(PLACEMENT_ACCEPTED_MESSAGE),
            current,
        }
    }
}

/// Body of `GET /state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StateView {
    /// Every stored placement, oldest first.
    pub towers: Vec<TowerPlacement>,
}

/// Body of `POST /reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResetAck {
    /// Always [`RESET_MESSAGE`].
    pub message: String,
    /// Number of placements discarded.
    #[ts(type = "number")]
    pub removed: usize,
}

impl ResetAck {
    /// Acknowledge a reset that discarded `removed` placements.
    pub fn new(removed: usize) -> Self {
        Self {
            message: String::from(RESET_MESSAGE),
            removed,
        }
    }
}
