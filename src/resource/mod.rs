//! # Resource Registry
//!
//! Static descriptions of the resource types the API serves. A
//! [`ResourceType`] names the collection, the attributes that appear in
//! responses, its validation rules, and whether it carries a secure
//! password (digested at save time, never serialized).

pub mod validation;

pub use validation::{On, Rule, SaveContext};

use crate::store::{Record, ValidationErrors};
use validation::validate;

/// One resource type exposed over HTTP.
pub struct ResourceType {
    /// Collection name; doubles as the JSON:API `type` and the route segment.
    pub name: &'static str,

    /// Attributes rendered in response documents. Everything else on the
    /// record (digests, tokens) stays private.
    pub public_attributes: &'static [&'static str],

    rules: Vec<Rule>,

    /// Whether create/update consume `password`/`password_confirmation`
    /// into an argon2 digest.
    pub secure_password: bool,
}

impl ResourceType {
    /// Validate a record for this type. Errors come back in rule
    /// declaration order.
    pub fn validate(&self, record: &Record, context: SaveContext) -> ValidationErrors {
        validate(&self.rules, record, context)
    }
}

/// The set of resource types served by this deployment.
pub struct Registry {
    types: Vec<ResourceType>,
}

impl Registry {
    pub fn new(types: Vec<ResourceType>) -> Self {
        Self { types }
    }

    pub fn get(&self, name: &str) -> Option<&ResourceType> {
        self.types.iter().find(|t| t.name == name)
    }
}

impl Default for Registry {
    /// The built-in `users` and `posts` types.
    fn default() -> Self {
        Self::new(vec![
            ResourceType {
                name: "users",
                public_attributes: &["full_name", "description"],
                rules: vec![
                    Rule::Required {
                        attribute: "full_name",
                        on: On::Always,
                    },
                    Rule::Required {
                        attribute: "password",
                        on: On::Create,
                    },
                    Rule::Confirmation {
                        attribute: "password",
                        confirmation: "password_confirmation",
                    },
                ],
                secure_password: true,
            },
            ResourceType {
                name: "posts",
                public_attributes: &["title", "content", "rating", "category"],
                rules: vec![
                    Rule::Required {
                        attribute: "title",
                        on: On::Always,
                    },
                    Rule::Required {
                        attribute: "content",
                        on: On::Always,
                    },
                ],
                secure_password: false,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = Registry::default();
        assert!(registry.get("users").is_some());
        assert!(registry.get("posts").is_some());
        assert!(registry.get("widgets").is_none());
    }

    #[test]
    fn test_users_are_secure_password_posts_are_not() {
        let registry = Registry::default();
        assert!(registry.get("users").unwrap().secure_password);
        assert!(!registry.get("posts").unwrap().secure_password);
    }

    #[test]
    fn test_public_attributes_exclude_secrets() {
        let registry = Registry::default();
        let users = registry.get("users").unwrap();
        assert!(!users.public_attributes.contains(&"password"));
        assert!(!users.public_attributes.contains(&"password_digest"));
        assert!(!users.public_attributes.contains(&"token"));
    }
}
