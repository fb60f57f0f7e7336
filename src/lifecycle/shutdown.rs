//! Shutdown coordination for the gateway.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time;

use crate::error::GatewayError;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that all long-running tasks can subscribe to.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Get the number of active subscribers (tasks still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait up to `grace` for the server task to finish draining.
///
/// The task is aborted when the grace period elapses.
pub async fn drain(
    mut handle: JoinHandle<Result<(), std::io::Error>>,
    grace: Duration,
) -> Result<(), GatewayError> {
    match time::timeout(grace, &mut handle).await {
        Ok(joined) => joined?.map_err(GatewayError::from),
        Err(_) => {
            handle.abort();
            tracing::error!(grace_secs = grace.as_secs(), "Server forced to shutdown");
            Err(GatewayError::GracePeriodElapsed(grace))
        }
    }
}
