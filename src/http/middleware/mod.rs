//! Request interceptors.
//!
//! Applied in order by `server::build_router`; any of them may answer the
//! request without calling the next one.

pub mod cors;

pub use cors::cors;
