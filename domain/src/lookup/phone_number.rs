//! Phone number value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of characters a phone number must have before it is submitted
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// A phone number that passed the client-side length check (Value Object)
///
/// Only the length is checked, counted in characters (Unicode scalar
/// values). Non-digit characters are accepted as-is and left for the
/// provider to judge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Validate and wrap a raw phone number
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let length = value.chars().count();
        if length != PHONE_NUMBER_LENGTH {
            return Err(DomainError::InvalidPhoneNumberLength { length });
        }
        Ok(Self { value })
    }

    /// Get the phone number as entered
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the inner value
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.value
    }
}
