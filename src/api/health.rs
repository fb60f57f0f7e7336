//! `GET|HEAD /api/health`.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::health::state::{HealthSnapshot, GATEWAY_STATUS};
use crate::http::server::AppState;
use crate::VERSION;

pub const X_HEALTH_STATUS: &str = "x-health-status";
pub const X_VERSION: &str = "x-version";

/// Always 200. HEAD answers from headers alone; GET probes the AI service.
pub async fn health_check(State(state): State<AppState>, method: Method) -> Response {
    let headers = [(X_HEALTH_STATUS, GATEWAY_STATUS), (X_VERSION, VERSION)];

    if method == Method::HEAD {
        return (StatusCode::OK, headers).into_response();
    }

    let outcome = state.probe.check().await;
    tracing::debug!(?outcome, url = %state.probe.url(), "AI service probed");

    (StatusCode::OK, headers, Json(HealthSnapshot::now(outcome.status()))).into_response()
}
