//! JSON API mounted under `/api`.
//!
//! ## Endpoint Map
//!
//! | Route                         | Handler              |
//! |-------------------------------|----------------------|
//! | `GET/HEAD /health`            | `health::health_check` |
//! | `GET /version`                | `version::version`   |
//! | `GET/POST /knowledge/`        | `knowledge::list`, `knowledge::create` |
//! | `GET/PUT/DELETE /knowledge/{id}` | `knowledge::get`, `update`, `delete` |
//! | `POST /ai/process`            | `ai::process`        |
//! | `POST /ai/extract-url`        | `ai::extract_url`    |
//!
//! A known path with an unsupported method gets the same JSON 404 as an
//! unknown path.

pub mod ai;
pub mod health;
pub mod knowledge;
pub mod version;

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::response::not_found;
use crate::http::server::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check).head(health::health_check))
        .route("/version", get(version::version))
        // Both spellings of the collection path are accepted.
        .route("/knowledge", get(knowledge::list).post(knowledge::create))
        .route("/knowledge/", get(knowledge::list).post(knowledge::create))
        .route(
            "/knowledge/{id}",
            get(knowledge::get).put(knowledge::update).delete(knowledge::delete),
        )
        .route("/ai/process", post(ai::process))
        .route("/ai/extract-url", post(ai::extract_url))
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}
