//! AI service proxy.
//!
//! # Data Flow
//! ```text
//! POST /api/ai/{process,extract-url}
//!     → target = http://{ai_host}:{ai_port}/ai/...
//!     → ProxyMode::Stub    → JSON {message, url}, no outbound call
//!     → ProxyMode::Forward → forward.rs (copy method, headers, body)
//!                          → headers.rs (drop host + hop-by-hop, add X-Forwarded-For)
//!                          → stream downstream status, headers, body back
//! ```

pub mod forward;
pub mod headers;

pub use forward::forward;
