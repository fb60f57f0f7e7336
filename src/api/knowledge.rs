//! Placeholder knowledge endpoints.
//!
//! Nothing is stored: every call is independent, ids are echoed back as
//! given, and request bodies are not read.

use axum::{extract::Path, http::StatusCode, Json};
use serde::Serialize;

/// The id handed out by `create`.
pub const PLACEHOLDER_ID: u64 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl KnowledgeRecord {
    fn placeholder(id: String) -> Self {
        Self {
            id,
            title: "Sample Knowledge".to_string(),
            kind: "placeholder".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KnowledgeList {
    pub knowledge: Vec<KnowledgeRecord>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub id: u64,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Acknowledged {
    pub id: String,
    pub message: &'static str,
}

pub async fn list() -> Json<KnowledgeList> {
    Json(KnowledgeList {
        knowledge: Vec::new(),
        total: 0,
    })
}

pub async fn create() -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            id: PLACEHOLDER_ID,
            message: "Knowledge created (placeholder)",
        }),
    )
}

pub async fn get(Path(id): Path<String>) -> Json<KnowledgeRecord> {
    Json(KnowledgeRecord::placeholder(id))
}

pub async fn update(Path(id): Path<String>) -> Json<Acknowledged> {
    Json(Acknowledged {
        id,
        message: "Knowledge updated (placeholder)",
    })
}

pub async fn delete(Path(id): Path<String>) -> Json<Acknowledged> {
    Json(Acknowledged {
        id,
        message: "Knowledge deleted (placeholder)",
    })
}
