//! Lookup request sent from the client to the gateway

use crate::lookup::phone_number::PhoneNumber;
use serde::{Deserialize, Serialize};

/// A phone number lookup request (wire form of `POST /api/search`)
///
/// The gateway accepts whatever strings arrive; validation happens on the
/// client before a request is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub country_code: String,
    pub phone_number: String,
}

impl LookupRequest {
    pub fn new(country_code: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Build a request from an already validated phone number
    pub fn from_validated(country_code: impl Into<String>, phone_number: PhoneNumber) -> Self {
        Self::new(country_code, phone_number.into_inner())
    }
}
