//! # JSON:API Module
//!
//! Document shapes for the JSON:API convention: resource documents, error
//! documents, and the lenient request-body parser. Pure data mapping, no
//! I/O.

pub mod document;
pub mod error_document;

pub use document::{CollectionDocument, Links, Meta, RequestDocument, ResourceObject, SingleDocument};
pub use error_document::ErrorDocument;

/// The JSON:API media type.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// Render an attribute name in lowercase-hyphenated member-name form
/// (`full_name` → `full-name`).
pub fn dasherize(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Inverse of [`dasherize`], applied to incoming attribute keys.
pub fn underscore(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dasherize() {
        assert_eq!(dasherize("full_name"), "full-name");
        assert_eq!(dasherize("Password_Confirmation"), "password-confirmation");
        assert_eq!(dasherize("title"), "title");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("full-name"), "full_name");
        assert_eq!(underscore("title"), "title");
    }
}
