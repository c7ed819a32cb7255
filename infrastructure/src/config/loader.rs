//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["callerid.toml", ".callerid.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CALLERID_*` environment variables (`__` separates sections)
    /// 2. `PORT` and `ID` environment variables
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./callerid.toml` or `./.callerid.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/callerid/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::deployment_env())
            .merge(Env::prefixed("CALLERID_").split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration plus the deployment environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::deployment_env())
            .extract()
            .map_err(Box::new)
    }

    /// `PORT` selects the listening port, `ID` the provider installation identifier
    fn deployment_env() -> Env {
        Env::raw().only(&["PORT", "ID"]).map(|key| {
            if key == "port" {
                "server.port".into()
            } else if key == "id" {
                "provider.installation_id".into()
            } else {
                key.as_str().to_string().into()
            }
        })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/callerid/config.toml if set,
    /// otherwise falls back to ~/.config/callerid/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("callerid").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: CALLERID_*, PORT, ID");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./callerid.toml or ./.callerid.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
