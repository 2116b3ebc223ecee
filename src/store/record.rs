//! # Records
//!
//! The record model shared by every collection: an ordered map of named
//! scalar attributes plus a transient validation-error set.

use serde::{Deserialize, Serialize};

/// A single attribute value.
///
/// Attributes are scalars only; nested structures are not part of the data
/// model and are dropped at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    /// Returns the string content, if this is a string attribute.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// A value counts as blank when it is null, an empty string, or
    /// whitespace only. Used by presence validation.
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Null => true,
            AttrValue::Str(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Convert a JSON value into an attribute value.
    ///
    /// Arrays and objects have no scalar representation and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(AttrValue::Null),
            serde_json::Value::Bool(b) => Some(AttrValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(AttrValue::Int(i))
                } else {
                    n.as_f64().map(AttrValue::Float)
                }
            }
            serde_json::Value::String(s) => Some(AttrValue::Str(s.clone())),
            _ => None,
        }
    }

    /// Convert back to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AttrValue::Null => serde_json::Value::Null,
            AttrValue::Bool(b) => serde_json::Value::Bool(*b),
            AttrValue::Int(i) => serde_json::Value::from(*i),
            AttrValue::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            AttrValue::Str(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

/// An insertion-ordered attribute map.
///
/// Replacing an existing attribute keeps its original position, so output
/// and validation order stay stable across updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set an attribute, preserving position on replacement.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Remove an attribute, returning its value if present.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let pos = self.0.iter().position(|(n, _)| n == name)?;
        Some(self.0.remove(pos).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge another attribute set into this one (incoming values win).
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.set(name, value.clone());
        }
    }
}

impl Serialize for Attributes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Validation failures attached to a record after a failed save attempt.
///
/// Ordered by evaluation, never deduplicated, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(Vec<(String, String)>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.0.push((attribute.into(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate (attribute, message) pairs in validation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(a, m)| (a.as_str(), m.as_str()))
    }
}

/// A mutable record belonging to one collection.
///
/// `id` is `None` until the store assigns one on first save. The error set
/// is transient request state; `MemoryStore` strips it before persisting.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Collection name, e.g. `users`.
    pub kind: String,
    pub id: Option<u64>,
    pub attributes: Attributes,
    pub errors: ValidationErrors,
}

impl Record {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            attributes: Attributes::new(),
            errors: ValidationErrors::new(),
        }
    }

    /// Build a record with attributes in one expression (used by seeds and
    /// tests).
    pub fn with_attributes<I, K, V>(kind: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut record = Record::new(kind);
        for (name, value) in attrs {
            record.attributes.set(name, value);
        }
        record
    }

    /// The identifier rendered as a JSON:API id string.
    pub fn id_string(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }
}
