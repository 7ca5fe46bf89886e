use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value as JsonValue;

use super::{KeyValueStore, StoreError, check_key};

/// In-memory store for tests/dev. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<String, JsonValue>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently holding a document.
    pub fn keys(&self) -> Vec<String> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<JsonValue>, StoreError> {
        check_key(key)?;
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(map.get(key).cloned())
    }

    fn save(&self, key: &str, value: &JsonValue) -> Result<(), StoreError> {
        check_key(key)?;
        let mut map = match self.inner.write() {
            Ok(m) => m,
            Err(poisoned) => poisoned.into_inner(),
        };
        map.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_until_saved() {
        let store = InMemoryStore::new();
        assert_eq!(store.load("employees").unwrap(), None);

        store.save("employees", &json!([{"id": "1"}])).unwrap();
        assert_eq!(store.load("employees").unwrap(), Some(json!([{"id": "1"}])));
        assert_eq!(store.keys(), vec!["employees".to_string()]);
    }

    #[test]
    fn last_write_wins() {
        let store = InMemoryStore::new();
        store.save("k", &json!(1)).unwrap();
        store.save("k", &json!(2)).unwrap();
        assert_eq!(store.load("k").unwrap(), Some(json!(2)));
    }
}
