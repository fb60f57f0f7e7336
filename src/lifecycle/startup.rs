//! Startup steps that touch the host.
//!
//! # Responsibilities
//! - Create the data and log directories
//! - Bind the listener
//!
//! A directory that cannot be created is only logged: nothing in the
//! gateway reads or writes those directories yet. A bind failure is fatal.

use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{GatewayConfig, ServerConfig};
use crate::error::GatewayError;

/// Create the data and log directories, returning the ones that failed.
pub fn ensure_directories(config: &GatewayConfig) -> Vec<&Path> {
    let mut failed = Vec::new();

    for dir in [config.data_dir.as_path(), config.log_dir.as_path()] {
        match std::fs::create_dir_all(dir) {
            Ok(()) => tracing::debug!(dir = %dir.display(), "Directory ready"),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Could not create directory");
                failed.push(dir);
            }
        }
    }

    failed
}

/// Bind the listener for the configured address.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener, GatewayError> {
    let address = config.bind_address();

    TcpListener::bind(&address)
        .await
        .map_err(|source| GatewayError::Bind { address, source })
}
