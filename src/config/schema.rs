//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! Every type derives `Serialize` so the effective configuration can be logged.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayConfig {
    /// Listener and request handling settings.
    pub server: ServerConfig,

    /// Downstream AI service location and proxy behaviour.
    pub ai_service: AiServiceConfig,

    /// Directory for application data.
    pub data_dir: PathBuf,

    /// Directory for log files.
    pub log_dir: PathBuf,

    /// Root of the assets served under `/static`.
    pub static_dir: PathBuf,

    /// Directory holding the landing page template.
    pub template_dir: PathBuf,

    /// Verbose development mode.
    pub debug: bool,

    /// Prometheus exporter settings.
    pub metrics: MetricsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Listen port.
    pub port: u16,

    /// Total time allowed for a single request, in seconds.
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,

    /// How long in-flight requests may run after a shutdown signal.
    pub shutdown_grace_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            max_body_bytes: 2 * 1024 * 1024, // 2MB
            shutdown_grace_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

/// How the `/api/ai/*` endpoints treat incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProxyMode {
    /// Answer with the target URL only; no outbound call.
    #[default]
    Stub,
    /// Relay the request to the AI service and stream its response back.
    Forward,
}

impl std::str::FromStr for ProxyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stub" => Ok(ProxyMode::Stub),
            "forward" => Ok(ProxyMode::Forward),
            other => Err(format!("unknown proxy mode '{}' (expected 'stub' or 'forward')", other)),
        }
    }
}

/// Downstream AI service configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AiServiceConfig {
    /// AI service host name or address.
    pub host: String,

    /// AI service port.
    pub port: u16,

    /// Timeout for the health probe, in seconds.
    pub health_timeout_secs: u64,

    /// Stub or forward.
    pub proxy_mode: ProxyMode,
}

impl Default for AiServiceConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8001,
            health_timeout_secs: 5,
            proxy_mode: ProxyMode::Stub,
        }
    }
}

impl AiServiceConfig {
    /// Base URL of the AI service, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Full URL for a path on the AI service.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn health_url(&self) -> String {
        self.url_for("/ai/health")
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }
}

/// Metrics exporter configuration.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsConfig {
    /// Start the Prometheus exporter.
    pub enabled: bool,

    /// Exporter bind address.
    pub address: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            address: "0.0.0.0:9090".to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ai_service: AiServiceConfig::default(),
            data_dir: PathBuf::from("./data"),
            log_dir: PathBuf::from("./logs"),
            static_dir: PathBuf::from("./static"),
            template_dir: PathBuf::from("./templates"),
            debug: false,
            metrics: MetricsConfig::default(),
        }
    }
}
