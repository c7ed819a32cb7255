//! Lookup API port
//!
//! The client-side view of the gateway: submit a request, get a result or
//! a failure.

use async_trait::async_trait;
use callerid_domain::{LookupRequest, LookupResult};
use thiserror::Error;

/// Reasons a call to the gateway did not produce a result
#[derive(Error, Debug)]
pub enum LookupApiError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Gateway returned status {0}")]
    Status(u16),

    #[error("Gateway reported an error: {0}")]
    Rejected(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Gateway as seen by the lookup client
#[async_trait]
pub trait LookupApi: Send + Sync {
    async fn search(&self, request: &LookupRequest) -> Result<LookupResult, LookupApiError>;
}
