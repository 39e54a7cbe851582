//! State Storage Port - Interface for the single persisted wizard slot.
//!
//! The whole `WizardState` is written as one blob under one well-known key.
//! There are no partial writes and no schema versions.

use async_trait::async_trait;

use crate::domain::wizard::WizardState;

/// Errors that can occur during state storage operations
#[derive(Debug, thiserror::Error)]
pub enum StateStorageError {
    #[error("No saved state under key: {0}")]
    NotFound(String),

    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading the wizard state
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Save the full state, replacing whatever the slot held
    ///
    /// # Errors
    /// Returns `StateStorageError` if serialization or the write fails
    async fn save_state(&self, state: &WizardState) -> Result<(), StateStorageError>;

    /// Load the saved state
    ///
    /// # Errors
    /// Returns `StateStorageError::NotFound` if nothing was saved yet (a blank
    /// blob counts as nothing) and `StateStorageError::DeserializationFailed`
    /// if the blob is corrupt
    async fn load_state(&self) -> Result<WizardState, StateStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_storage_error_not_found() {
        let err = StateStorageError::NotFound("6q_state".to_string());
        assert!(err.to_string().contains("No saved state"));
        assert!(err.to_string().contains("6q_state"));
    }

    #[test]
    fn test_state_storage_error_deserialization() {
        let err = StateStorageError::DeserializationFailed("expected value".to_string());
        assert!(err.to_string().contains("deserialize"));
    }

    #[test]
    fn test_state_storage_error_serialization() {
        let err = StateStorageError::SerializationFailed("bad map key".to_string());
        assert!(err.to_string().contains("serialize"));
    }
}
