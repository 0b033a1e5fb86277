use axum::{
    Json,
    body::Bytes,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while relaying a request. Each variant
/// maps to exactly one terminal HTTP response; nothing is retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("invalid JSON in request body")]
    InvalidJson(#[source] serde_json::Error),
    #[error("upstream returned {status}")]
    Upstream { status: StatusCode, body: Bytes },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method Not Allowed" })),
            )
                .into_response(),
            RelayError::InvalidJson(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Bad Request: Invalid JSON" })),
            )
                .into_response(),
            // The upstream's status and JSON error body are relayed verbatim.
            RelayError::Upstream { status, body } => {
                (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            RelayError::Transport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response(),
        }
    }
}
