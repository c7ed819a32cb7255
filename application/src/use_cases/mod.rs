//! Use cases
//!
//! - [`search_phone_number`]: gateway side: provider call and normalization
//! - [`submit_lookup`]: client side: one submit/settle cycle of the lookup form

pub mod search_phone_number;
pub mod submit_lookup;
