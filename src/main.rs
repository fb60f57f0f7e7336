//! SeedFlow knowledge gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ listener ──▶ interceptors ──▶ router ─┬─▶ /api/health ──▶ AI service probe
//!                          (panic, id, trace,        ├─▶ /api/knowledge (placeholder)
//!                           cors, metrics,           ├─▶ /api/ai/* ──▶ stub | forward
//!                           limit, timeout)          ├─▶ /static/*
//!                                                    └─▶ /  (HTML or JSON, fixed at startup)
//!
//!   SIGINT/SIGTERM ──▶ stop accepting ──▶ drain (grace period) ──▶ exit
//! ```

use std::path::Path;
use std::process::ExitCode;

use knowledge_gateway::config::loader::{load_config, ENV_FILE};
use knowledge_gateway::lifecycle::{self, signals, startup};
use knowledge_gateway::observability::{logging, metrics};
use knowledge_gateway::{GatewayError, GatewayServer, VERSION};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Gateway terminated");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), GatewayError> {
    let config = match load_config(Path::new(ENV_FILE)) {
        Ok(config) => config,
        Err(e) => {
            logging::init(false);
            return Err(e.into());
        }
    };

    logging::init(config.debug);
    tracing::info!(version = VERSION, debug = config.debug, "knowledge-gateway starting");
    tracing::debug!(config = ?config, "Configuration loaded");

    startup::ensure_directories(&config);

    if config.metrics.enabled {
        match config.metrics.address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.metrics.address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = startup::bind_listener(&config.server).await?;
    let port = listener.local_addr()?.port();

    tracing::info!(
        port,
        ai_service = %config.ai_service.base_url(),
        proxy_mode = ?config.ai_service.proxy_mode,
        "SeedFlow server started"
    );
    tracing::info!("Web UI: http://localhost:{}", port);
    tracing::info!("API: http://localhost:{}/api", port);

    let server = GatewayServer::new(config);
    lifecycle::run(server, listener, signals::termination()).await
}
