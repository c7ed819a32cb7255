//! Application-level configuration.
//!
//! Both structs are built once at startup and passed into constructors:
//!
//! - [`GatewayConfig`]: listening address and provider credentials for the gateway
//! - [`ClientConfig`]: where the lookup client finds the gateway

pub mod client_config;
pub mod gateway_config;

pub use client_config::ClientConfig;
pub use gateway_config::GatewayConfig;
