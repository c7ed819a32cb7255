//! Country metadata lookup for provider answers
//!
//! The directory is a JSON object keyed by region code:
//!
//! ```json
//! { "IN": { "name": "India", "native": "भारत", "phone": [91], "continent": "AS",
//!           "capital": "New Delhi", "currency": ["INR"], "languages": ["hi", "en"],
//!           "flag": "🇮🇳" } }
//! ```

use callerid_domain::CountryDetails;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a country directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read country directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid country directory: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Region code → country details
#[derive(Debug, Clone, Default)]
pub struct CountryDirectory {
    entries: HashMap<String, CountryDetails>,
}

impl CountryDirectory {
    /// A directory with no entries; every lookup yields `None`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let raw: HashMap<String, CountryDetails> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(code, details)| (code.to_ascii_uppercase(), details))
            .collect();
        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Details for a region code (case-insensitive)
    pub fn get(&self, code: &str) -> Option<&CountryDetails> {
        self.entries.get(&code.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
