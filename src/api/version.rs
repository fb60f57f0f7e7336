use axum::Json;
use serde::Serialize;

use crate::{BUILD, SERVICE_NAME, VERSION};

#[derive(Serialize)]
pub struct VersionInfo {
    pub build: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

pub async fn version() -> Json<VersionInfo> {
    Json(VersionInfo {
        build: BUILD,
        name: SERVICE_NAME,
        version: VERSION,
    })
}
