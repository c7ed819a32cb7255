//! Lookup provider adapters
//!
//! - [`http_lookup::HttpLookupProvider`]: reqwest binding of the
//!   [`callerid_application::LookupProvider`] port
//! - [`country_directory::CountryDirectory`]: country metadata attached to answers

pub mod country_directory;
pub mod http_lookup;

pub use country_directory::{CountryDirectory, DirectoryError};
pub use http_lookup::{HttpLookupProvider, HttpProviderResponse};
