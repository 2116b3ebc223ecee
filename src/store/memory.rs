//! # In-Memory Store
//!
//! `Store` implementation backed by a `RwLock`-guarded map of collections.
//! Each collection gets its own auto-incrementing id sequence. Every
//! operation takes the lock once, so individual mutations are atomic as
//! seen by concurrent requests.

use std::collections::HashMap;
use std::sync::RwLock;

use super::record::{Record, ValidationErrors};
use super::Store;

#[derive(Default)]
struct Collection {
    next_id: u64,
    records: Vec<Record>,
}

impl Collection {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory record store.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn all(&self, collection: &str) -> Vec<Record> {
        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        collections
            .get(collection)
            .map(|c| c.records.clone())
            .unwrap_or_default()
    }

    fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        collections.get(collection).map_or(0, |c| c.records.len())
    }

    fn find(&self, collection: &str, id: u64) -> Option<Record> {
        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        collections
            .get(collection)?
            .records
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
    }

    fn find_by(&self, collection: &str, attribute: &str, value: &str) -> Option<Record> {
        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        collections
            .get(collection)?
            .records
            .iter()
            .find(|r| r.attributes.get(attribute).and_then(|v| v.as_str()) == Some(value))
            .cloned()
    }

    fn save(&self, mut record: Record) -> Record {
        // Transient request state never reaches the store.
        record.errors = ValidationErrors::new();

        let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
        let collection = collections.entry(record.kind.clone()).or_default();

        match record.id {
            Some(id) => match collection.records.iter_mut().find(|r| r.id == Some(id)) {
                Some(existing) => *existing = record.clone(),
                None => collection.records.push(record.clone()),
            },
            None => {
                record.id = Some(collection.allocate_id());
                collection.records.push(record.clone());
            }
        }

        record
    }

    fn delete(&self, collection: &str, id: u64) -> bool {
        let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
        let Some(collection) = collections.get_mut(collection) else {
            return false;
        };
        let before = collection.records.len();
        collection.records.retain(|r| r.id != Some(id));
        collection.records.len() < before
    }
}
