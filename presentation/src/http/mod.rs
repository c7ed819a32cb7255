//! HTTP surface of the gateway

pub mod router;

pub use router::{AppState, build_router};
