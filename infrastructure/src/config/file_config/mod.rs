//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are converted into the application's config structs at startup.

mod client;
mod output;
mod provider;
mod server;

pub use client::FileClientConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use server::FileServerConfig;

use callerid_application::{ClientConfig, GatewayConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.installation_id is not set (use the ID environment variable or [provider] installation_id)")]
    MissingInstallationId,

    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("client.gateway_url cannot be empty")]
    EmptyGatewayUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gateway listener settings
    pub server: FileServerConfig,
    /// External provider settings
    pub provider: FileProviderConfig,
    /// Lookup client settings
    pub client: FileClientConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Build the gateway configuration, rejecting values the gateway cannot run with
    pub fn to_gateway_config(&self) -> Result<GatewayConfig, ConfigValidationError> {
        let installation_id = self
            .provider
            .installation_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ConfigValidationError::MissingInstallationId)?;

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        let mut config = GatewayConfig::new(installation_id)
            .with_host(self.server.host.clone())
            .with_port(self.server.port);

        match self.provider.timeout_seconds {
            Some(0) => return Err(ConfigValidationError::InvalidTimeout),
            Some(seconds) => config = config.with_provider_timeout(Duration::from_secs(seconds)),
            None => {}
        }

        Ok(config)
    }

    /// Build the lookup client configuration
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigValidationError> {
        if self.client.gateway_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyGatewayUrl);
        }

        let mut config = ClientConfig::default().with_gateway_url(self.client.gateway_url.clone());
        if !self.client.show_progress {
            config = config.without_progress();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_installation_id(id: &str) -> FileConfig {
        let mut config = FileConfig::default();
        config.provider.installation_id = Some(id.to_string());
        config
    }

    #[test]
    fn test_gateway_config_requires_installation_id() {
        assert_eq!(
            FileConfig::default().to_gateway_config().unwrap_err(),
            ConfigValidationError::MissingInstallationId
        );
        assert_eq!(
            with_installation_id("   ").to_gateway_config().unwrap_err(),
            ConfigValidationError::MissingInstallationId
        );
    }

    #[test]
    fn test_gateway_config_from_defaults() {
        let config = with_installation_id("install-1").to_gateway_config().unwrap();
        assert_eq!(config.installation_id, "install-1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.provider_timeout.is_none());
    }

    #[test]
    fn test_gateway_config_rejects_zero_values() {
        let mut config = with_installation_id("install-1");
        config.server.port = 0;
        assert_eq!(
            config.to_gateway_config().unwrap_err(),
            ConfigValidationError::InvalidPort
        );

        let mut config = with_installation_id("install-1");
        config.provider.timeout_seconds = Some(0);
        assert_eq!(
            config.to_gateway_config().unwrap_err(),
            ConfigValidationError::InvalidTimeout
        );
    }

    #[test]
    fn test_gateway_config_timeout() {
        let mut config = with_installation_id("install-1");
        config.provider.timeout_seconds = Some(10);
        assert_eq!(
            config.to_gateway_config().unwrap().provider_timeout,
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn test_client_config() {
        let mut config = FileConfig::default();
        config.client.show_progress = false;
        let client = config.to_client_config().unwrap();
        assert_eq!(client.gateway_url, "http://localhost:5000");
        assert!(!client.show_progress);

        config.client.gateway_url = " ".to_string();
        assert_eq!(
            config.to_client_config().unwrap_err(),
            ConfigValidationError::EmptyGatewayUrl
        );
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
[server]
host = "127.0.0.1"
port = 8080
log_dir = "/var/log/callerid"

[provider]
installation_id = "install-1"
base_url = "https://provider.example.com"
countries_file = "countries.json"
timeout_seconds = 15

[client]
gateway_url = "https://lookup.example.com"
show_progress = false

[output]
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.installation_id.as_deref(), Some("install-1"));
        assert_eq!(config.provider.timeout_seconds, Some(15));
        assert_eq!(config.client.gateway_url, "https://lookup.example.com");
        assert!(!config.output.color);
    }
}
