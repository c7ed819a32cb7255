//! Gateway configuration

use std::time::Duration;

/// Port the gateway listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 5000;

/// Address the gateway binds to when nothing else is configured
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings the lookup gateway is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Opaque identifier the provider requires to authorize lookups
    pub installation_id: String,
    /// Upper bound on a single provider call; `None` leaves it to the transport
    pub provider_timeout: Option<Duration>,
}

impl GatewayConfig {
    pub fn new(installation_id: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            installation_id: installation_id.into(),
            provider_timeout: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = Some(timeout);
        self
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
