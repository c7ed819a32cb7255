//! Client configuration from TOML (`[client]` section)

use callerid_application::config::client_config::DEFAULT_GATEWAY_URL;
use serde::{Deserialize, Serialize};

/// Raw lookup client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of the gateway
    pub gateway_url: String,
    /// Show a spinner while a lookup is pending
    pub show_progress: bool,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            show_progress: true,
        }
    }
}
