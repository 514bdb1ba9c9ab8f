//! Error types for static-comments

use thiserror::Error;

use crate::types::FIELD_POST_ID;

/// Main error type for static-comments
#[derive(Debug, Error)]
pub enum CommentError {
    /// A comment source lacks a required metadata field
    #[error("comment {source_name} does not have a {field}")]
    MissingField {
        source_name: String,
        field: &'static str,
    },

    /// A comment source carries a date that cannot be parsed
    #[error("comment {source_name} has an invalid date: {value:?}")]
    InvalidDate { source_name: String, value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CommentError>,
    },
}

impl CommentError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CommentError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is a missing `post_id`
    pub fn is_missing_post_id(&self) -> bool {
        match self {
            CommentError::MissingField { field, .. } => *field == FIELD_POST_ID,
            CommentError::WithContext { source, .. } => source.is_missing_post_id(),
            _ => false,
        }
    }
}

/// Result type alias for static-comments
pub type Result<T> = std::result::Result<T, CommentError>;
