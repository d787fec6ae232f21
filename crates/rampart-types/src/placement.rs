//! The tower placement record.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single tower recorded at a board coordinate.
///
/// The wire shape is exactly `{"towerId": string, "x": int, "y": int}`.
/// Unknown keys in an incoming body are ignored. Coordinates also accept
/// integral floats and numeric strings on the way in (see
/// [`coordinate`](crate::coordinate)); they always serialize as integers.
/// No range, uniqueness or tower-type checks are applied: two placements
/// may share a `towerId` and coordinates may be any `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TowerPlacement {
    /// Opaque tower identifier chosen by the client.
    #[serde(rename = "towerId")]
    pub tower_id: String,
    /// Horizontal board coordinate.
    #[serde(deserialize_with = "crate::coordinate::deserialize")]
    #[ts(type = "number")]
    pub x: i64,
    /// Vertical board coordinate.
    #[serde(deserialize_with = "crate::coordinate::deserialize")]
    #[ts(type = "number")]
    pub y: i64,
}

impl TowerPlacement {
    /// Build a placement from its parts.
    pub fn new(tower_id: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            tower_id: tower_id.into(),
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_id() {
        let placement = TowerPlacement::new("t1", 3, 4);
        let json = serde_json::to_value(&placement).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"towerId": "t1", "x": 3, "y": 4}));
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"towerId":"t9","x":-2,"y":7,"towerType":"cannon"}"#;
        let parsed: Result<TowerPlacement, _> = serde_json::from_str(body);
        assert_eq!(parsed.ok(), Some(TowerPlacement::new("t9", -2, 7)));
    }

    #[test]
    fn rejects_missing_coordinate() {
        let parsed: Result<TowerPlacement, _> = serde_json::from_str(r#"{"towerId":"t1","y":4}"#);
        let err = parsed.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.contains("missing field `x`"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let parsed: Result<TowerPlacement, _> =
            serde_json::from_str(r#"{"towerId":"t1","x":"left","y":4}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn coerced_coordinates_serialize_as_integers() {
        let parsed: Result<TowerPlacement, _> =
            serde_json::from_str(r#"{"towerId":"t1","x":"3","y":4.0}"#);
        let placement = parsed.ok();
        assert_eq!(placement, Some(TowerPlacement::new("t1", 3, 4)));
        let json = placement.and_then(|p| serde_json::to_value(p).ok());
        assert_eq!(json, Some(serde_json::json!({"towerId": "t1", "x": 3, "y": 4})));
    }

    #[test]
    fn rejects_snake_case_id() {
        let parsed: Result<TowerPlacement, _> =
            serde_json::from_str(r#"{"tower_id":"t1","x":1,"y":4}"#);
        assert!(parsed.is_err());
    }
}
