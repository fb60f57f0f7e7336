//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request and lifecycle event produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the trace span
//! - Metrics labels use the matched route template, never the raw path
//! - With no exporter installed the metric macros are no-ops

pub mod logging;
pub mod metrics;
