//! Server configuration from TOML (`[server]` section)

use callerid_application::config::gateway_config::{DEFAULT_HOST, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw gateway listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on (overridden by the `PORT` environment variable)
    pub port: u16,
    /// Directory for daily-rotated log files; stderr only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_dir: None,
        }
    }
}
