//! Error types for the query engine.

use thiserror::Error;

/// Errors raised while validating a query or looking up a single record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    /// A caller-supplied value is malformed or outside the accepted range.
    #[error("invalid {field}: {message}")]
    InvalidParameter { field: &'static str, message: String },

    /// A well-formed identifier matched no record.
    #[error("no {} found with ID {id}", .kind.to_lowercase())]
    NotFound { kind: &'static str, id: u64 },
}

impl QueryError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        QueryError::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}
