//! File-based State Storage Adapter
//!
//! Keeps the wizard state in one JSON file, `<data_dir>/<key>.json`.
//! Saves go through a sibling `.tmp` file and a rename, so a crash mid-write
//! leaves the previous save intact.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::wizard::WizardState;
use crate::ports::{StateStorage, StateStorageError};

/// Default storage key, shared with the browser build.
pub const DEFAULT_STATE_KEY: &str = "6q_state";

/// Wizard state persisted as a JSON file
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    data_dir: PathBuf,
    key: String,
}

impl FileStateStorage {
    /// Storage in `data_dir` under the default key.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::with_key(data_dir, DEFAULT_STATE_KEY)
    }

    pub fn with_key<P: AsRef<Path>>(data_dir: P, key: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    pub fn state_file_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.key))
    }

    fn temp_file_path(&self) -> PathBuf {
        self.state_file_path().with_extension("tmp")
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn save_state(&self, state: &WizardState) -> Result<(), StateStorageError> {
        let json = serde_json::to_string(state)
            .map_err(|e| StateStorageError::SerializationFailed(e.to_string()))?;

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        let target = self.state_file_path();
        let temp = self.temp_file_path();
        fs::write(&temp, json).await.map_err(|e| {
            StateStorageError::IoError(format!("Failed to write temporary file: {}", e))
        })?;
        fs::rename(&temp, &target).await.map_err(|e| {
            StateStorageError::IoError(format!("Failed to replace state file: {}", e))
        })?;

        tracing::debug!(path = %target.display(), "Saved wizard state");
        Ok(())
    }

    async fn load_state(&self) -> Result<WizardState, StateStorageError> {
        let path = self.state_file_path();

        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StateStorageError::NotFound(self.key.clone()))
            }
            Err(e) => return Err(StateStorageError::IoError(e.to_string())),
        };

        // A blank slot holds no session.
        if json.trim().is_empty() {
            return Err(StateStorageError::NotFound(self.key.clone()));
        }

        serde_json::from_str(&json)
            .map_err(|e| StateStorageError::DeserializationFailed(e.to_string()))
    }
}
