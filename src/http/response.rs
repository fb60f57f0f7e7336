//! Shared response bodies.

use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// JSON error response with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

/// Fallback for paths with no route, and for routed paths hit with a method
/// they do not accept.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    json_error(StatusCode::NOT_FOUND, format!("no route for {}", uri.path()))
}
