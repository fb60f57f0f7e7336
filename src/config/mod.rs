//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional)      process environment
//!         \                    /
//!          → loader.rs (merge: process env wins, then .env, then defaults)
//!          → validation.rs (parse + semantic checks)
//!          → GatewayConfig (validated, immutable)
//!          → shared via Arc to every handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so an empty environment is a valid config
//! - An empty variable is treated the same as an unset one

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AiServiceConfig, GatewayConfig, MetricsConfig, ProxyMode, ServerConfig};
