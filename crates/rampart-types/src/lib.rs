//! Shared type definitions for the Rampart tower placement service.
//!
//! Every JSON shape that crosses the HTTP boundary is defined here. Types
//! flow downstream to `TypeScript` via `ts-rs` so the browser table can
//! decode `/state` polls without hand-maintained interfaces.
//!
//! # Modules
//!
//! - [`placement`] -- The [`TowerPlacement`] record
//! - [`coordinate`] -- Lenient integer decoding for coordinates
//! - [`responses`] -- Response envelopes returned by the HTTP routes

pub mod coordinate;
pub mod placement;
pub mod responses;

pub use placement::TowerPlacement;
pub use responses::{PlacementAccepted, ResetAck, StateView};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::placement::TowerPlacement::export_all();
        let _ = crate::responses::PlacementAccepted::export_all();
        let _ = crate::responses::StateView::export_all();
        let _ = crate::responses::ResetAck::export_all();
    }
}
