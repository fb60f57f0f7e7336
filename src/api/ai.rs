//! `/api/ai/*` endpoints in front of the AI service.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::ProxyMode;
use crate::http::server::AppState;
use crate::proxy;

pub const PROCESS_PATH: &str = "/ai/process";
pub const EXTRACT_URL_PATH: &str = "/ai/extract-url";

const PLACEHOLDER_MESSAGE: &str = "AI service proxy (placeholder)";

#[derive(Debug, Serialize)]
pub struct ProxyPlaceholder {
    pub message: &'static str,
    pub url: String,
}

pub async fn process(State(state): State<AppState>, request: Request<Body>) -> Response {
    relay(&state, PROCESS_PATH, request).await
}

pub async fn extract_url(State(state): State<AppState>, request: Request<Body>) -> Response {
    relay(&state, EXTRACT_URL_PATH, request).await
}

async fn relay(state: &AppState, path: &str, request: Request<Body>) -> Response {
    let target = state.config.ai_service.url_for(path);

    match state.config.ai_service.proxy_mode {
        ProxyMode::Stub => Json(ProxyPlaceholder {
            message: PLACEHOLDER_MESSAGE,
            url: target,
        })
        .into_response(),
        ProxyMode::Forward => proxy::forward(&state.client, &target, request).await,
    }
}
