use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scoring::{ScoringConfig, DEFAULT_CUTOFF, MAX_ITEM_COUNT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Every field optional in the file
// Raw numbers kept as written; clamping happens in scoring()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub search_cutoff: i64,
    pub max_items: i64,
    /// Rows visible before the list scrolls. Display only.
    pub max_displayed_items: usize,
    pub inline_search_cutoff: i64,
    pub clear_search_on_selection: bool,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            search_cutoff: i64::from(DEFAULT_CUTOFF),
            max_items: MAX_ITEM_COUNT as i64,
            max_displayed_items: 6,
            inline_search_cutoff: i64::from(DEFAULT_CUTOFF),
            clear_search_on_selection: true,
        }
    }
}

impl PaletteSettings {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parameters for the cross-provider search.
    pub fn scoring(&self) -> ScoringConfig {
        ScoringConfig::new(self.search_cutoff, self.max_items)
    }

    /// Parameters for ranking a single parameter's inline values.
    pub fn inline_scoring(&self) -> ScoringConfig {
        ScoringConfig::new(self.inline_search_cutoff, self.max_items)
    }
}
