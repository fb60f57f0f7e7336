//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/health
//!     → probe.rs (one bounded GET to the AI service)
//!     → ProbeOutcome (healthy / status / connection error / timeout)
//!     → state.rs (fold into HealthSnapshot)
//!     → JSON body, always 200
//!
//! HEAD /api/health
//!     → headers only, no probe
//! ```
//!
//! # Design Decisions
//! - Snapshots are computed per request and never cached
//! - Downstream failures degrade the body, never the status code
//! - Failure causes are kept apart in ProbeOutcome for logging only

pub mod probe;
pub mod state;

pub use probe::{AiServiceProbe, ProbeOutcome};
pub use state::{DownstreamStatus, HealthSnapshot};
