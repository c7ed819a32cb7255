//! Lookup provider port
//!
//! Defines the interface the gateway uses to reach the external phone-lookup
//! provider. The gateway only depends on the five accessors of
//! [`ProviderResponse`], never on the provider's full response shape.

use async_trait::async_trait;
use callerid_domain::{Address, CountryDetails};
use thiserror::Error;

/// Errors that can occur while talking to the provider
///
/// These stay inside the gateway: they are logged, then collapsed into
/// [`crate::SearchError::LookupFailed`].
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Query handed to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    pub number: String,
    pub country_code: String,
    /// Credential the provider requires; comes from deployment configuration
    pub installation_id: String,
}

impl ProviderQuery {
    pub fn new(
        number: impl Into<String>,
        country_code: impl Into<String>,
        installation_id: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            country_code: country_code.into(),
            installation_id: installation_id.into(),
        }
    }
}

/// Capability view over a provider answer
pub trait ProviderResponse: Send + Sync {
    fn name(&self) -> Option<String>;

    fn alternate_name(&self) -> Option<String>;

    /// Postal addresses, in provider order
    fn addresses(&self) -> Vec<Address>;

    fn email(&self) -> Option<String>;

    fn country_details(&self) -> Option<CountryDetails>;

    /// Raw payload for diagnostics, if the adapter keeps one
    fn raw(&self) -> Option<&serde_json::Value> {
        None
    }
}

/// External phone-lookup provider
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    async fn search(&self, query: &ProviderQuery) -> Result<Box<dyn ProviderResponse>, ProviderError>;
}
