//! # Error Documents
//!
//! The JSON:API error document: a top-level `errors` array whose entries
//! carry a human-readable `detail` and a `source.pointer` into
//! `/data/attributes/`. Built from a record's validation errors; pure and
//! order-preserving.

use serde::Serialize;

use crate::store::Record;

use super::dasherize;

/// One entry in the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub detail: String,
    pub source: ErrorSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSource {
    pub pointer: String,
}

/// `{ "errors": [ { "detail", "source": { "pointer" } } ] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    /// Build from a record carrying validation errors, one entry per
    /// failure in validation order. No deduplication.
    pub fn from_record(record: &Record) -> Self {
        Self {
            errors: record
                .errors
                .iter()
                .map(|(attribute, message)| ErrorObject {
                    detail: message.to_string(),
                    source: ErrorSource {
                        pointer: format!("/data/attributes/{}", dasherize(attribute)),
                    },
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointers_are_dasherized() {
        let mut record = Record::new("users");
        record.errors.add("full_name", "can't be blank");
        record.errors.add("password", "can't be blank");

        let doc = ErrorDocument::from_record(&record);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["errors"][0]["detail"], "can't be blank");
        assert_eq!(json["errors"][0]["source"]["pointer"], "/data/attributes/full-name");
        assert_eq!(json["errors"][1]["source"]["pointer"], "/data/attributes/password");
    }

    #[test]
    fn test_wrong_id_document_shape() {
        let mut record = Record::new("users");
        record.errors.add("id", "Wrong ID provided");

        let json = serde_json::to_string(&ErrorDocument::from_record(&record)).unwrap();
        assert_eq!(
            json,
            r#"{"errors":[{"detail":"Wrong ID provided","source":{"pointer":"/data/attributes/id"}}]}"#
        );
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let mut record = Record::new("users");
        record.errors.add("password", "can't be blank");
        record.errors.add("full_name", "can't be blank");
        record.errors.add("password", "is too short");

        let doc = ErrorDocument::from_record(&record);
        let pointers: Vec<&str> = doc.errors.iter().map(|e| e.source.pointer.as_str()).collect();
        assert_eq!(
            pointers,
            vec![
                "/data/attributes/password",
                "/data/attributes/full-name",
                "/data/attributes/password",
            ]
        );
    }
}
