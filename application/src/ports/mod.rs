//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod lookup_api;
pub mod lookup_provider;
pub mod progress;
