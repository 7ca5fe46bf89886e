//! Persistence port: a key-value store of JSON documents.
//!
//! One key per collection. Writes replace the whole document; there is no
//! partial update and no cross-key transaction.

pub mod file;
pub mod in_memory;

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value as JsonValue;
use thiserror::Error;

pub use file::FileStore;
pub use in_memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored document for {key:?} is not valid: {message}")]
    Corrupt { key: String, message: String },

    #[error("failed to serialize {key:?}: {message}")]
    Serialize { key: String, message: String },
}

/// Synchronous JSON document store.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing has been saved under `key` yet.
    fn load(&self, key: &str) -> Result<Option<JsonValue>, StoreError>;

    fn save(&self, key: &str, value: &JsonValue) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn load(&self, key: &str) -> Result<Option<JsonValue>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &JsonValue) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// Keys double as file names, so keep them to a safe alphabet.
pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !key.starts_with('.');
    if ok { Ok(()) } else { Err(StoreError::InvalidKey(key.to_string())) }
}
