//! Error taxonomy shared by the metadata layer
//!
//! - [`ConfigurationError`]: broken descriptor tables, raised while an
//!   entity class (or a status table) is being registered.
//! - [`CodecError`]: a record does not have the shape the entity codec
//!   expects for one of its fields.
//! - [`ValidationError`]: a single field value violates its rules.

use thiserror::Error;

/// Descriptor table cannot be registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("entity {entity}: duplicate field name '{field}'")]
    DuplicateField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("entity {entity}: malformed descriptor '{field}': {reason}")]
    MalformedDescriptor {
        entity: &'static str,
        field: &'static str,
        reason: &'static str,
    },

    #[error("entity {0} is registered twice")]
    DuplicateEntity(&'static str),

    #[error("status table {table}: duplicate value '{value}'")]
    DuplicateStatus { table: &'static str, value: String },
}

/// Record shape does not match the codec's expectations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("field '{field}' is missing or null")]
    MissingField { field: &'static str },

    #[error("field '{field}' is malformed: expected {expected}, found {found}")]
    MalformedField {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("record does not match wire schema of {entity}: {message}")]
    WireShape {
        entity: &'static str,
        message: String,
    },
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
