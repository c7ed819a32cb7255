//! Domain layer for callerid
//!
//! This crate contains the lookup entities, value objects and the client-side
//! session state machine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Lookup
//!
//! A [`LookupRequest`] pairs a phone number with a dialing-region code. The
//! gateway answers it with a [`LookupResult`], a flat record of the five fields
//! extracted from the provider's response.
//!
//! ## Session
//!
//! The client drives one [`LookupSession`] per form: `Idle` → `Pending` →
//! `Succeeded` / `Failed`, with every transition applied as a single event.

pub mod client;
pub mod core;
pub mod lookup;

// Re-export commonly used types
pub use client::session::{LookupOutcome, LookupPhase, LookupSession, RequestDraft, SubmitTicket};
pub use crate::core::error::{DomainError, LOOKUP_FAILED_MESSAGE, SessionError, VALIDATION_MESSAGE};
pub use lookup::{
    phone_number::{PHONE_NUMBER_LENGTH, PhoneNumber},
    region::{Region, find_region, regions},
    request::LookupRequest,
    result::{Address, CountryDetails, LookupResult},
};
