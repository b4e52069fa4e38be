//! Error types for collection operations.
//!
//! This module defines the structured error type raised by the operation
//! catalogue, the depth dispatcher and the chain facade. Errors fall into two
//! groups: absence signals raised by the `*_or_exception` accessors, and usage
//! errors that indicate a programming mistake in the caller (bad parameters,
//! descending into something that is not a container, malformed JSON).

use thiserror::Error;

/// Structured error types for collection operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A requested key, position, first or last element does not exist
    #[error("{what} not found")]
    NotFound { what: String },

    /// A parameter is outside the range an operation accepts
    #[error("Invalid argument for {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    /// A nested element expected to be a container is something else
    #[error("Element at '{path}' is not a container (found {actual})")]
    NotAContainer { path: String, actual: String },

    /// A value cannot be used in the way an operation requires
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A decode helper was given text that is not valid JSON
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },
}

impl CollectionError {
    /// Builds a `NotFound` error for a missing key.
    pub fn key_not_found(key: impl std::fmt::Display) -> Self {
        CollectionError::NotFound {
            what: format!("Key '{key}'"),
        }
    }

    /// Builds an `InvalidArgument` error for the named operation.
    pub fn invalid_argument(operation: &str, reason: impl Into<String>) -> Self {
        CollectionError::InvalidArgument {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error signals an absent element
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::NotFound { .. })
    }

    /// Check if this error indicates misuse by the caller
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CollectionError::InvalidArgument { .. }
                | CollectionError::NotAContainer { .. }
                | CollectionError::TypeMismatch { .. }
                | CollectionError::InvalidJson { .. }
        )
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            CollectionError::TypeMismatch { .. } | CollectionError::NotAContainer { .. }
        )
    }

    /// Check if this error is related to JSON decoding
    pub fn is_json_error(&self) -> bool {
        matches!(self, CollectionError::InvalidJson { .. })
    }

    /// Get the operation name if this is a parameter error
    pub fn operation(&self) -> Option<&str> {
        match self {
            CollectionError::InvalidArgument { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// Get the nesting path if this error came from a depth walk
    pub fn path(&self) -> Option<&str> {
        match self {
            CollectionError::NotAContainer { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
