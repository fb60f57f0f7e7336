//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Ensure directories → Bind listener (fatal on failure)
//!
//! Run (this module):
//!     Spawn server task → wait for signal or server exit
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Draining is bounded by the configured grace period
//! - An in-flight health probe is not cancelled; it finishes or times out

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;

use std::future::Future;

use tokio::net::TcpListener;

use crate::error::GatewayError;
use crate::http::GatewayServer;

/// Serve until `signal` resolves, then drain within the grace period.
///
/// Returns early if the server task ends on its own.
pub async fn run<F>(server: GatewayServer, listener: TcpListener, signal: F) -> Result<(), GatewayError>
where
    F: Future<Output = ()>,
{
    let grace = server.config().server.shutdown_grace();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let mut handle = tokio::spawn(server.run(listener, server_shutdown));

    tokio::select! {
        joined = &mut handle => {
            tracing::warn!("HTTP server exited before a shutdown signal");
            return joined?.map_err(GatewayError::from);
        }
        _ = signal => {}
    }

    tracing::info!(
        grace_secs = grace.as_secs(),
        subscribers = shutdown.receiver_count(),
        "Shutting down server"
    );
    shutdown.trigger();
    shutdown::drain(handle, grace).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
