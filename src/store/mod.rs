//! # Store Module
//!
//! The persistence abstraction the HTTP layer depends on. Handlers only see
//! the [`Store`] trait; the built-in implementation is [`MemoryStore`].

pub mod memory;
pub mod record;

pub use memory::MemoryStore;
pub use record::{AttrValue, Attributes, Record, ValidationErrors};

/// Record store interface.
///
/// Collections are addressed by name (`users`, `posts`). Lookups return
/// owned copies; a record held by a handler is a transient snapshot, not a
/// live reference into the store.
pub trait Store: Send + Sync {
    /// All records of a collection, in insertion order.
    fn all(&self, collection: &str) -> Vec<Record>;

    /// Number of records in a collection.
    fn count(&self, collection: &str) -> usize;

    /// Look up a record by id.
    fn find(&self, collection: &str, id: u64) -> Option<Record>;

    /// Look up the first record whose string attribute equals `value`.
    fn find_by(&self, collection: &str, attribute: &str, value: &str) -> Option<Record>;

    /// Persist a record. Assigns an id when the record has none; otherwise
    /// replaces the stored record with the same id. Returns the stored copy.
    fn save(&self, record: Record) -> Record;

    /// Remove a record. Returns whether anything was deleted.
    fn delete(&self, collection: &str, id: u64) -> bool;
}
