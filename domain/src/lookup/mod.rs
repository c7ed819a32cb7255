//! Lookup subdomain: the records exchanged across the gateway boundary.
//!
//! - [`request::LookupRequest`]: what the client submits
//! - [`result::LookupResult`]: the flat record the gateway answers with
//! - [`phone_number::PhoneNumber`]: the client-side length check
//! - [`region`]: the dialing regions offered by the client

pub mod phone_number;
pub mod region;
pub mod request;
pub mod result;
