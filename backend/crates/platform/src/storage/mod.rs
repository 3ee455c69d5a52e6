//! Durable Client Storage
//!
//! A small key/value abstraction modelled on browser local storage:
//! string values addressed by string keys, surviving process restarts.
//!
//! Two backends:
//! - [`FileStore`] - one file per key under a directory
//! - [`MemoryStore`] - process-local map, for tests and ephemeral runs

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

/// Maximum key length
const KEY_MAX_LENGTH: usize = 128;

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Key is empty, too long, or contains characters outside `[A-Za-z0-9_.-]`
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failure
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key/value storage backend
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Validate a storage key.
///
/// Keys double as file names for [`FileStore`], so path separators and
/// leading dots are rejected for every backend.
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key.len() <= KEY_MAX_LENGTH
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
