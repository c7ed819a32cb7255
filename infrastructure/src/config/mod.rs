//! Configuration file loading for callerid
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `PORT`, `ID`, and `CALLERID_*` variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./callerid.toml` or `./.callerid.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/callerid/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClientConfig, FileConfig, FileOutputConfig, FileProviderConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
