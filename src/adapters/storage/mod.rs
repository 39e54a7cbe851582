//! Storage Adapters
//!
//! `StateStorage` implementations for the single wizard slot:
//! - `FileStateStorage` - `<data_dir>/<key>.json`, replaced atomically on save
//! - `InMemoryStateStorage` - holds the serialized text, used by tests

mod file_state_storage;
mod in_memory_state_storage;

pub use file_state_storage::{FileStateStorage, DEFAULT_STATE_KEY};
pub use in_memory_state_storage::InMemoryStateStorage;
