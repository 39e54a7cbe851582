//! Storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the wizard keeps its saved session and printed summaries
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the state file and printed summaries
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Storage slot name; the state file is `<data_dir>/<state_key>.json`
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

impl StorageConfig {
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__DATA_DIR"));
        }
        if self.state_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__STATE_KEY"));
        }
        if self.state_key.contains(['/', '\\']) || self.state_key == "." || self.state_key == ".." {
            return Err(ValidationError::InvalidStateKey(self.state_key.clone()));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            state_key: default_state_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_state_key() -> String {
    "6q_state".to_string()
}
