//! # Validation Rules
//!
//! Declarative per-attribute rules evaluated in declaration order. The
//! result is a fresh [`ValidationErrors`] on every save attempt; nothing is
//! cached between requests.

use crate::store::{Record, ValidationErrors};

/// When a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum On {
    /// Only when the record is first created.
    Create,
    /// On every save.
    Always,
}

/// Save context passed to rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveContext {
    Create,
    Update,
}

/// A single validation rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The attribute must be present and non-blank.
    Required { attribute: &'static str, on: On },

    /// `confirmation` must equal `attribute` whenever both are supplied.
    /// Skipped when either side is absent or the attribute itself is
    /// blank.
    Confirmation {
        attribute: &'static str,
        confirmation: &'static str,
    },
}

impl Rule {
    fn apply(&self, record: &Record, context: SaveContext, errors: &mut ValidationErrors) {
        match self {
            Rule::Required { attribute, on } => {
                if *on == On::Create && context != SaveContext::Create {
                    return;
                }
                let blank = record
                    .attributes
                    .get(attribute)
                    .map_or(true, |v| v.is_blank());
                if blank {
                    errors.add(*attribute, "can't be blank");
                }
            }
            Rule::Confirmation {
                attribute,
                confirmation,
            } => {
                let Some(value) = record.attributes.get(attribute) else {
                    return;
                };
                let Some(confirmed) = record.attributes.get(confirmation) else {
                    return;
                };
                if value.is_blank() {
                    return;
                }
                if value != confirmed {
                    errors.add(*confirmation, format!("doesn't match {attribute}"));
                }
            }
        }
    }
}

/// Run a rule set against a record, in declaration order.
pub fn validate(rules: &[Rule], record: &Record, context: SaveContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in rules {
        rule.apply(record, context, &mut errors);
    }
    errors
}
