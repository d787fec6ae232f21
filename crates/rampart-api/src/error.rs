//! Error types for the HTTP layer.
//!
//! [`ApiError`] converts into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The body is
//! always `{"error": .., "status": .., "detail": .., "field": ..}`, where
//! `field` is the path of the offending key (`"x"`, `"towerId"`) or `null`
//! when the body was unreadable as a whole.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded into a tower placement.
    #[error("invalid tower placement: {detail}")]
    InvalidPlacement {
        /// Decoder message.
        detail: String,
        /// Path of the failing field, if the failure is field-specific.
        field: Option<String>,
    },
}

impl ApiError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPlacement { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Syntax errors and a missing content type are not tied to a field.
        Self::InvalidPlacement {
            detail: rejection.body_text(),
            field: None,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ApiError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let detail = err.inner().to_string();
        let path = err.path().to_string();
        // A missing key is reported against its parent, so recover the key
        // from the message instead.
        let field = if path == "." {
            missing_field(&detail).map(str::to_owned)
        } else {
            Some(path)
        };
        Self::InvalidPlacement { detail, field }
    }
}

/// Key named by serde's "missing field `name`" message.
fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::InvalidPlacement { detail, field } => serde_json::json!({
                "error": "invalid tower placement",
                "status": status.as_u16(),
                "detail": detail,
                "field": field,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use rampart_types::TowerPlacement;
    use serde_json::json;

    use super::*;

    fn decode(body: serde_json::Value) -> Option<ApiError> {
        serde_path_to_error::deserialize::<_, TowerPlacement>(body)
            .err()
            .map(ApiError::from)
    }

    fn field_of(err: Option<ApiError>) -> Option<String> {
        match err {
            Some(ApiError::InvalidPlacement { field, .. }) => field,
            None => None,
        }
    }

    #[test]
    fn invalid_placement_is_unprocessable() {
        let err = ApiError::InvalidPlacement {
            detail: String::from("missing field `x`"),
            field: Some(String::from("x")),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn missing_key_names_the_field() {
        let err = decode(json!({"towerId": "t1", "y": 4}));
        assert_eq!(field_of(err), Some(String::from("x")));
    }

    #[test]
    fn mistyped_key_names_the_field() {
        assert_eq!(
            field_of(decode(json!({"towerId": "t1", "x": 1, "y": "down"}))),
            Some(String::from("y"))
        );
        assert_eq!(
            field_of(decode(json!({"towerId": 7, "x": 1, "y": 2}))),
            Some(String::from("towerId"))
        );
    }

    #[test]
    fn non_object_body_has_no_field() {
        assert_eq!(field_of(decode(json!([1, 2, 3]))), None);
    }

    #[test]
    fn missing_field_parses_message() {
        assert_eq!(missing_field("missing field `towerId`"), Some("towerId"));
        assert_eq!(missing_field("invalid type: sequence"), None);
    }
}
