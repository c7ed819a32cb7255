//! Domain error types

use thiserror::Error;

/// Hint shown when a phone number does not have the expected length
pub const VALIDATION_MESSAGE: &str = "Please make sure the number is 10 digits long";

/// The only failure text a caller ever sees for a lookup
pub const LOOKUP_FAILED_MESSAGE: &str = "An error occurred";

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please make sure the number is 10 digits long")]
    InvalidPhoneNumberLength { length: usize },
}

/// Transitions a [`crate::LookupSession`] refuses to apply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("A lookup is already in progress")]
    AlreadyPending,

    #[error("Response does not belong to the pending lookup")]
    StaleTicket,
}

impl SessionError {
    /// Check if this error is a user-input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Invalid(_))
    }
}
