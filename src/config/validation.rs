//! Configuration validation.
//!
//! # Responsibilities
//! - Parse raw environment strings into typed values
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::config::schema::GatewayConfig;

/// A single rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Environment variable (or field) that was rejected.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Parse an optional raw value, recording a [`ValidationError`] on failure.
///
/// Returns `None` both when the value is absent and when it fails to parse.
pub fn parse_var<T>(key: &str, raw: Option<String>, errors: &mut Vec<ValidationError>) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(ValidationError::new(key, format!("invalid value '{}': {}", raw, e)));
            None
        }
    }
}

/// Semantic checks on a fully resolved config.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::new("REQUEST_TIMEOUT_SECS", "must be greater than 0"));
    }
    if config.server.shutdown_grace_secs == 0 {
        errors.push(ValidationError::new("SHUTDOWN_GRACE_SECS", "must be greater than 0"));
    }
    if config.server.max_body_bytes == 0 {
        errors.push(ValidationError::new("MAX_BODY_BYTES", "must be greater than 0"));
    }
    if config.ai_service.health_timeout_secs == 0 {
        errors.push(ValidationError::new("HEALTH_CHECK_TIMEOUT_SECS", "must be greater than 0"));
    }
    // The probe has to finish before the request timeout answers for it.
    if config.ai_service.health_timeout_secs > 0
        && config.server.request_timeout_secs > 0
        && config.ai_service.health_timeout_secs >= config.server.request_timeout_secs
    {
        errors.push(ValidationError::new(
            "HEALTH_CHECK_TIMEOUT_SECS",
            format!(
                "must be less than REQUEST_TIMEOUT_SECS ({})",
                config.server.request_timeout_secs
            ),
        ));
    }
    if config.ai_service.host.trim().is_empty() {
        errors.push(ValidationError::new("AI_SERVICE_HOST", "must not be blank"));
    }
    if config.metrics.enabled && config.metrics.address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "METRICS_ADDRESS",
            format!("'{}' is not a socket address", config.metrics.address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
