//! Application layer for callerid
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ClientConfig, GatewayConfig};
pub use ports::{
    lookup_api::{LookupApi, LookupApiError},
    lookup_provider::{LookupProvider, ProviderError, ProviderQuery, ProviderResponse},
    progress::{LookupProgressNotifier, NoProgress},
};
pub use use_cases::search_phone_number::{SearchError, SearchPhoneNumberUseCase};
pub use use_cases::submit_lookup::SubmitLookupUseCase;
