//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Pick a default filter from the debug flag
//!
//! `RUST_LOG` always wins over the computed default.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "knowledge_gateway=info,tower_http=info";
const DEBUG_FILTER: &str = "knowledge_gateway=debug,tower_http=debug";

/// Default filter directives for the given mode.
pub fn default_directives(debug: bool) -> &'static str {
    if debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install the global subscriber.
///
/// Calling this twice is harmless; the second attempt is ignored.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(debug).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(debug))
        .try_init();
}
