//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, interceptor chain)
//!     → middleware/ (CORS + OPTIONS short-circuit)
//!     → api/ handlers, landing.rs, or static files
//!     → response.rs (shared error bodies)
//! ```

pub mod client;
pub mod landing;
pub mod middleware;
pub mod response;
pub mod server;

pub use server::{AppState, GatewayServer};
