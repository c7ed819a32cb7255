//! Infrastructure layer for callerid
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileClientConfig, FileConfig, FileOutputConfig,
    FileProviderConfig, FileServerConfig,
};
pub use gateway::HttpLookupApi;
pub use providers::{CountryDirectory, DirectoryError, HttpLookupProvider, HttpProviderResponse};
