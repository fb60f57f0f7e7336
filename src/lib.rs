//! SeedFlow knowledge gateway library.
//!
//! A single-process HTTP front-end: placeholder knowledge endpoints, a
//! proxy toward the AI service, static assets, and a health endpoint that
//! probes the AI service.

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;

/// Product name reported by `/api/version`.
pub const SERVICE_NAME: &str = "SeedFlow";

/// Gateway version reported by every endpoint that carries one.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build label, overridable at compile time with `SEEDFLOW_BUILD`.
pub const BUILD: &str = match option_env!("SEEDFLOW_BUILD") {
    Some(build) => build,
    None => "docker",
};
