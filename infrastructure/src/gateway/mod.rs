//! Gateway client adapters
//!
//! - [`http_lookup_api::HttpLookupApi`]: reqwest binding of the
//!   [`callerid_application::LookupApi`] port

pub mod http_lookup_api;

pub use http_lookup_api::HttpLookupApi;
