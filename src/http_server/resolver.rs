//! # Resource Resolver
//!
//! Translates a path identifier into a record, or into a structured 404.
//! A raw "not found" never crosses this boundary: the failure is always a
//! JSON:API error document built from a synthetic record with a single
//! `id` error.

use crate::jsonapi::ErrorDocument;
use crate::store::{Record, Store};

use super::errors::ApiError;

/// Look up a record by its route identifier.
///
/// Identifiers that do not parse as ids (`"abc"`) take the same 404 path
/// as ids that match no record.
pub fn resolve(store: &dyn Store, collection: &str, raw_id: &str) -> Result<Record, ApiError> {
    raw_id
        .parse::<u64>()
        .ok()
        .and_then(|id| store.find(collection, id))
        .ok_or_else(|| not_found(collection))
}

fn not_found(collection: &str) -> ApiError {
    let mut record = Record::new(collection);
    record.errors.add("id", "Wrong ID provided");
    ApiError::NotFound(ErrorDocument::from_record(&record))
}
