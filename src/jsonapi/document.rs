//! # Resource Documents
//!
//! Response document types (`data` / `meta` / `links`) and the request-body
//! side: a lenient reader for `{ "data": { "type", "id", "attributes" } }`
//! bodies that never fails — missing or malformed pieces simply come back
//! as `None`, for the guards to judge.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceType;
use crate::store::{AttrValue, Attributes, Record};

use super::{dasherize, underscore};

/// A single serialized resource: `type`, `id`, and dasherized attributes.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: Attributes,
}

impl ResourceObject {
    /// Serialize a record, rendering exactly the type's public attributes
    /// (missing ones as null) with dasherized keys.
    pub fn from_record(record: &Record, resource: &ResourceType) -> Self {
        let mut attributes = Attributes::new();
        for name in resource.public_attributes {
            let value = record
                .attributes
                .get(name)
                .cloned()
                .unwrap_or(AttrValue::Null);
            attributes.set(dasherize(name), value);
        }
        Self {
            kind: record.kind.clone(),
            id: record.id_string(),
            attributes,
        }
    }
}

/// `{ "data": { ... } }`
#[derive(Debug, Clone, Serialize)]
pub struct SingleDocument {
    pub data: ResourceObject,
}

impl SingleDocument {
    pub fn new(record: &Record, resource: &ResourceType) -> Self {
        Self {
            data: ResourceObject::from_record(record, resource),
        }
    }
}

/// Collection-level `meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    #[serde(rename = "total-count")]
    pub total_count: usize,
}

/// Collection-level pagination `links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Links {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

/// `{ "data": [ ... ], "meta": { ... }, "links": { ... } }`
#[derive(Debug, Clone, Serialize)]
pub struct CollectionDocument {
    pub data: Vec<ResourceObject>,
    pub meta: Meta,
    pub links: Links,
}

impl CollectionDocument {
    pub fn new(records: &[Record], resource: &ResourceType, meta: Meta, links: Links) -> Self {
        Self {
            data: records
                .iter()
                .map(|r| ResourceObject::from_record(r, resource))
                .collect(),
            meta,
            links,
        }
    }
}

/// Parsed request body.
///
/// All fields are optional; the resource-type guard decides what absence
/// means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDocument {
    #[serde(default)]
    pub data: Option<RequestData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestData {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: Option<serde_json::Map<String, serde_json::Value>>,
}

impl RequestDocument {
    /// Parse a raw body. Malformed JSON or a non-document shape yields the
    /// empty document rather than an error.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The `data.type` member, if present.
    pub fn resource_type(&self) -> Option<&str> {
        self.data.as_ref()?.kind.as_deref()
    }

    /// Deserialize `data.attributes` into record attributes.
    ///
    /// Keys are underscored (`full-name` → `full_name`); non-scalar values
    /// are dropped.
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        if let Some(map) = self.data.as_ref().and_then(|d| d.attributes.as_ref()) {
            for (key, value) in map {
                if let Some(value) = AttrValue::from_json(value) {
                    attributes.set(underscore(key), value);
                }
            }
        }
        attributes
    }
}
