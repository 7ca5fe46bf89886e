//! Serialized read-modify-write access to one collection.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;

use shopfloor_core::{DomainError, DomainResult, Entity, find_by_id, position_of};

use crate::collection::Collection;
use crate::error::ServiceResult;
use crate::store::{KeyValueStore, StoreError};

/// Plain CRUD over a seeded collection.
///
/// Every operation holds the repository lock for its whole
/// load → modify → save cycle, so callers in one process never interleave.
/// Separate processes sharing a store still race (last write wins).
#[derive(Debug)]
pub struct Repository<T, S> {
    store: S,
    collection: Collection<T>,
    lock: Mutex<()>,
}

impl<T, S> Repository<T, S>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(store: S, collection: Collection<T>) -> Self {
        Self {
            store,
            collection,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The lock protects no data of its own, so a poisoned guard is still usable.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn not_found(&self, id: &str) -> DomainError {
        DomainError::not_found(format!("{} {id}", self.collection.label()))
    }

    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        let _g = self.guard();
        self.collection.load(&self.store)
    }

    pub fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        let _g = self.guard();
        let records = self.collection.load(&self.store)?;
        Ok(find_by_id(&records, id).cloned())
    }

    /// Append a record built by the caller (ids are assigned upstream).
    pub fn insert(&self, record: T) -> Result<T, StoreError> {
        let _g = self.guard();
        let mut records = self.collection.load(&self.store)?;
        records.push(record.clone());
        self.collection.save(&self.store, &records)?;
        Ok(record)
    }

    /// Replace the record with `id` by `f(current)`.
    ///
    /// Nothing is written if the record is missing or `f` fails.
    pub fn update_with<F>(&self, id: &str, f: F) -> ServiceResult<T>
    where
        F: FnOnce(&T) -> DomainResult<T>,
    {
        let _g = self.guard();
        let mut records = self.collection.load(&self.store)?;
        let idx = position_of(&records, id).ok_or_else(|| self.not_found(id))?;

        let next = f(&records[idx])?;
        if next.id() != id {
            return Err(DomainError::validation("record id cannot change").into());
        }
        records[idx] = next.clone();
        self.collection.save(&self.store, &records)?;
        Ok(next)
    }

    /// Remove the record with `id`. Returns whether anything was removed;
    /// the store is only written when it was.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let _g = self.guard();
        let mut records = self.collection.load(&self.store)?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.collection.save(&self.store, &records)?;
        Ok(true)
    }
}
