//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: value object validation errors
//! - [`error::SessionError`]: rejected client session transitions

pub mod error;
