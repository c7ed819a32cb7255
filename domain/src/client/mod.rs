//! Client subdomain: the lookup form as an explicit state machine.

pub mod session;
