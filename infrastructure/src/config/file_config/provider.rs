//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Search host used when `base_url` is not configured
pub const DEFAULT_PROVIDER_URL: &str = "https://search5-noneu.truecaller.com";

/// Raw external provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Installation identifier the provider authorizes lookups with
    /// (overridden by the `ID` environment variable)
    #[serde(deserialize_with = "string_or_number")]
    pub installation_id: Option<String>,
    /// Base URL of the provider's search API
    pub base_url: String,
    /// JSON file mapping region codes to country details
    pub countries_file: Option<PathBuf>,
    /// Upper bound on a provider call in seconds; transport defaults when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            installation_id: None,
            base_url: DEFAULT_PROVIDER_URL.to_string(),
            countries_file: None,
            timeout_seconds: None,
        }
    }
}

// Environment values that look numeric arrive as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
    }))
}
