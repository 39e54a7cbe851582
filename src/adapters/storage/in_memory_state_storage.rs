//! In-Memory State Storage Adapter
//!
//! Keeps the serialized blob in memory, exactly as it would be written to
//! disk. Useful for testing, including tests that plant a corrupt blob.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::wizard::WizardState;
use crate::ports::{StateStorage, StateStorageError};

use super::file_state_storage::DEFAULT_STATE_KEY;

/// In-memory storage for the wizard state
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStorage {
    blob: Arc<RwLock<Option<String>>>,
    writes: Arc<RwLock<usize>>,
}

impl InMemoryStateStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage that already holds `blob`, valid or not
    pub fn with_raw(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(RwLock::new(Some(blob.into()))),
            writes: Arc::new(RwLock::new(0)),
        }
    }

    /// Replace the stored blob with arbitrary text
    pub async fn put_raw(&self, blob: impl Into<String>) {
        *self.blob.write().await = Some(blob.into());
    }

    /// The stored blob as written
    pub async fn raw(&self) -> Option<String> {
        self.blob.read().await.clone()
    }

    /// Number of successful `save_state` calls
    pub async fn write_count(&self) -> usize {
        *self.writes.read().await
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn save_state(&self, state: &WizardState) -> Result<(), StateStorageError> {
        let json = serde_json::to_string(state)
            .map_err(|e| StateStorageError::SerializationFailed(e.to_string()))?;

        *self.blob.write().await = Some(json);
        *self.writes.write().await += 1;
        Ok(())
    }

    async fn load_state(&self) -> Result<WizardState, StateStorageError> {
        let blob = self.blob.read().await;
        let json = blob
            .as_deref()
            .filter(|json| !json.trim().is_empty())
            .ok_or_else(|| StateStorageError::NotFound(DEFAULT_STATE_KEY.to_string()))?;

        serde_json::from_str(json)
            .map_err(|e| StateStorageError::DeserializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionId;
    use crate::domain::wizard::WizardStep;

    fn test_state() -> WizardState {
        let mut state = WizardState::default();
        state.set_step(WizardStep::Summary);
        state.set_answer(QuestionId::Q6, "Measure cycle time");
        state
    }

    #[tokio::test]
    async fn test_memory_storage_save_and_load_state() {
        let storage = InMemoryStateStorage::new();

        storage.save_state(&test_state()).await.unwrap();

        let loaded = storage.load_state().await.unwrap();
        assert_eq!(loaded, test_state());
        assert_eq!(storage.write_count().await, 1);
    }

    #[tokio::test]
    async fn test_memory_storage_load_nonexistent_state() {
        let storage = InMemoryStateStorage::new();

        let result = storage.load_state().await;

        assert!(matches!(result, Err(StateStorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_memory_storage_keeps_serialized_blob() {
        let storage = InMemoryStateStorage::new();

        storage.save_state(&test_state()).await.unwrap();

        let raw = storage.raw().await.unwrap();
        assert!(raw.contains("\"currentStep\":7"));
        assert!(raw.contains("\"q6\":\"Measure cycle time\""));
    }

    #[tokio::test]
    async fn test_memory_storage_corrupt_blob() {
        let storage = InMemoryStateStorage::with_raw("not json at all");

        let result = storage.load_state().await;

        assert!(matches!(result, Err(StateStorageError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn test_memory_storage_put_raw_replaces_blob() {
        let storage = InMemoryStateStorage::new();
        storage.save_state(&test_state()).await.unwrap();

        storage.put_raw(r#"{"currentStep":2,"answers":{}}"#).await;

        let loaded = storage.load_state().await.unwrap();
        assert_eq!(loaded.current_step().index(), 2);
        assert!(loaded.answers().is_empty());
    }

    #[tokio::test]
    async fn test_memory_storage_blank_blob_is_not_found() {
        for blank in ["", " \t\n"] {
            let storage = InMemoryStateStorage::with_raw(blank);

            let result = storage.load_state().await;

            assert!(matches!(result, Err(StateStorageError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_memory_storage_clones_share_the_slot() {
        let storage = InMemoryStateStorage::new();
        let handle = storage.clone();

        storage.save_state(&test_state()).await.unwrap();

        assert_eq!(handle.load_state().await.unwrap(), test_state());
    }
}
