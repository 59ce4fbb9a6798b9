use crate::app::ProductError;
use crate::transport::http::types::{ErrorResponse, ValidationErrorResponse};
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

/// Parses a request body as JSON. An empty body counts as `{}`.
///
/// Content-Type is not checked; a body that is not JSON gets a 400.
pub fn parse_json_body(body: &Bytes) -> Result<JsonValue, Response> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid JSON body: {}", e),
            }),
        )
            .into_response()
    })
}

/// Maps a service error onto its HTTP status and JSON body.
pub fn error_response(err: ProductError) -> Response {
    let status = match &err {
        ProductError::Validation(_) | ProductError::InvalidId(_) => StatusCode::BAD_REQUEST,
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::Storage(_) | ProductError::IdsExhausted => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    match err {
        ProductError::Validation(errors) => {
            (status, Json(ValidationErrorResponse { errors })).into_response()
        }
        ProductError::Storage(e) => {
            tracing::error!(error = %e, "storage failure");
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        other => (
            status,
            Json(ErrorResponse {
                error: other.to_string(),
            }),
        )
            .into_response(),
    }
}
