//! Health snapshot returned by `GET /api/health`.
//!
//! Field order is alphabetical so the JSON body matches the
//! key-sorted output clients of the previous gateway already parse.

use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::VERSION;

/// There is no database behind the gateway; the field is kept for callers.
pub const DATABASE_STATUS: &str = "connected";

/// Overall gateway status; the gateway is healthy whenever it can answer.
pub const GATEWAY_STATUS: &str = "healthy";

/// Downstream AI service status as reported in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownstreamStatus {
    Healthy,
    Unavailable,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    pub ai_service: DownstreamStatus,
    pub database: &'static str,
    pub status: &'static str,
    /// RFC 3339 local time at which the snapshot was taken.
    pub timestamp: String,
    pub version: &'static str,
}

impl HealthSnapshot {
    pub fn now(ai_service: DownstreamStatus) -> Self {
        Self {
            ai_service,
            database: DATABASE_STATUS,
            status: GATEWAY_STATUS,
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = HealthSnapshot::now(DownstreamStatus::Unavailable);
        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(json.starts_with(r#"{"ai_service":"unavailable","database":"connected","status":"healthy","timestamp":""#));
        assert!(json.ends_with(r#","version":"1.0.0"}"#));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let snapshot = HealthSnapshot::now(DownstreamStatus::Healthy);
        assert!(chrono::DateTime::parse_from_rfc3339(&snapshot.timestamp).is_ok());
    }
}
