//! Error types for YAML parsing.

use thiserror::Error;

/// Error type for layout parsing and attribute lookup.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Missing required attribute
    #[error("Missing required field: {0}")]
    MissingField(String),
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
    /// Two widgets declare the same id
    #[error("Duplicate widget id: {0}")]
    DuplicateId(String),
}
