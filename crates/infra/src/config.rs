//! Store configuration from the environment.
//!
//! - `SHOPFLOOR_STORE`: `file` (default) or `memory`
//! - `SHOPFLOOR_DATA_DIR`: directory for the file store (default `./shopfloor-data`)

use std::path::PathBuf;
use std::sync::Arc;

use crate::services::SharedStore;
use crate::store::{FileStore, InMemoryStore};

pub const STORE_ENV: &str = "SHOPFLOOR_STORE";
pub const DATA_DIR_ENV: &str = "SHOPFLOOR_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "shopfloor-data";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = match lookup(STORE_ENV).as_deref().map(str::trim) {
            None | Some("") | Some("file") => StoreBackend::File,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                tracing::warn!(value = other, "unknown SHOPFLOOR_STORE value; using file store");
                StoreBackend::File
            }
        };

        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Self { backend, data_dir }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn open(&self) -> SharedStore {
        match self.backend {
            StoreBackend::File => {
                tracing::info!(dir = %self.data_dir.display(), "using file store");
                Arc::new(FileStore::new(self.data_dir.clone()))
            }
            StoreBackend::Memory => {
                tracing::warn!("using in-memory store; nothing will be persisted");
                Arc::new(InMemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_file_store_in_working_dir() {
        assert_eq!(StoreConfig::from_lookup(lookup(&[])), StoreConfig::default());
    }

    #[test]
    fn reads_backend_and_dir() {
        let cfg = StoreConfig::from_lookup(lookup(&[(STORE_ENV, "memory"), (DATA_DIR_ENV, "/var/lib/shopfloor")]));
        assert_eq!(cfg.backend, StoreBackend::Memory);
        assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/shopfloor"));
    }

    #[test]
    fn unknown_backend_falls_back_to_file() {
        let cfg = StoreConfig::from_lookup(lookup(&[(STORE_ENV, "postgres")]));
        assert_eq!(cfg.backend, StoreBackend::File);
    }

    #[test]
    fn opened_file_store_writes_into_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = StoreConfig::default().with_data_dir(dir.path()).open();
        store.save("employees", &serde_json::json!([])).unwrap();
        assert!(dir.path().join("employees.json").exists());
    }
}
