//! Typed view over one store key holding a JSON array of records.

use core::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::store::{KeyValueStore, StoreError};

/// Store keys, one per collection.
pub mod keys {
    pub const INVENTORY_ITEMS: &str = "manufacturingApp_inventoryItems";
    pub const INVENTORY_MOVEMENTS: &str = "manufacturingApp_inventoryMovements";
    pub const PRODUCTION_ORDERS: &str = "productionOrders";
    pub const EMPLOYEES: &str = "employees";
    pub const CUSTOMERS: &str = "manufacttrack_customers";
}

/// A named, seeded collection of records stored under one key.
pub struct Collection<T> {
    key: &'static str,
    label: &'static str,
    seed: fn() -> Vec<T>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<T> {}

impl<T> core::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Collection")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub const fn new(key: &'static str, label: &'static str, seed: fn() -> Vec<T>) -> Self {
        Self {
            key,
            label,
            seed,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Human-readable record kind, used in not-found errors.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Load all records. An absent key is seeded with the sample data,
    /// which is persisted immediately.
    pub fn load(&self, store: &dyn KeyValueStore) -> Result<Vec<T>, StoreError> {
        match store.load(self.key)? {
            Some(doc) => serde_json::from_value(doc).map_err(|e| StoreError::Corrupt {
                key: self.key.to_string(),
                message: e.to_string(),
            }),
            None => {
                let seeded = (self.seed)();
                tracing::debug!(key = self.key, records = seeded.len(), "seeding empty collection");
                self.save(store, &seeded)?;
                Ok(seeded)
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore, records: &[T]) -> Result<(), StoreError> {
        let doc: JsonValue = serde_json::to_value(records).map_err(|e| StoreError::Serialize {
            key: self.key.to_string(),
            message: e.to_string(),
        })?;
        store.save(self.key, &doc)
    }
}
