//! Shared Error Types
//!
//! Errors raised while turning request bodies into DTOs: absent or
//! malformed JSON bodies and field validation failures. Both end up as
//! `400 Bad Request` responses. Field names are reported as they appear on
//! the wire (camelCase).
//!
//! # Usage
//!
//! ```rust
//! use bookstore_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Name is required");
//! assert!(error.to_string().contains("name"));
//! ```
use convert_case::{Case, Casing};
use thiserror::Error;
use validator::ValidationErrors;

/// Shared error types raised while handling request payloads
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Request body is absent or is not valid JSON for the DTO
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field (or comma separated fields) that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error from a body rejection message
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collapses every failing field into one error, ordered by field name
impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let mut failures: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let message = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                (field.to_case(Case::Camel), message)
            })
            .collect();
        failures.sort();

        let fields = failures
            .iter()
            .map(|(field, _)| field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let message = failures
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(fields, message)
    }
}
