//! Error types for ordered map operations.
//!
//! Every strict operation in [`crate::arrays`] reports failures through
//! [`MapError`]. Lenient forms (`get_or`, `pick_or`, view member reads) never
//! produce these errors.

use thiserror::Error;

/// Structured error types for ordered map operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MapError {
    /// The requested key or path is absent and no default was supplied
    #[error("Missing item '{key}'")]
    KeyNotFound { key: String },

    /// A matching pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Traversal expected a container but found a scalar
    #[error("Traversed item '{key}' is not a map, found {actual}")]
    NotAMap { key: String, actual: &'static str },

    /// A value cannot be used as a key
    #[error("Value of type {actual} cannot be used as a key")]
    InvalidKey { actual: &'static str },

    /// Typed extraction found a value of another type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl MapError {
    /// Check if this error reports a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, MapError::KeyNotFound { .. })
    }

    /// Check if this error reports a malformed pattern
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, MapError::InvalidPattern { .. })
    }

    /// Check if this error reports a traversal through a scalar
    pub fn is_not_a_map(&self) -> bool {
        matches!(self, MapError::NotAMap { .. })
    }

    /// Check if this error reports an unusable key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, MapError::InvalidKey { .. })
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, MapError::TypeMismatch { .. })
    }

    /// Get the key or path if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::KeyNotFound { key } | MapError::NotAMap { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
