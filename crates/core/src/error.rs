//! Store error model.

use thiserror::Error;

/// Result type used across the store domain.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// The taxonomy is flat: no variant wraps another error. Every variant names
/// the operation that failed so callers can surface, log, or retry without
/// reconstructing context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Token was missing, blank, or not present in the registry.
    #[error("{action}: unauthorized, invalid or missing token")]
    Unauthorized { action: String },

    /// A capacity policy was applied to an inventory of the wrong type.
    #[error("{action}: {message}")]
    TypeMismatch { action: String, message: String },

    /// A quantity change would drive the count below zero.
    #[error("{action}: {message}")]
    NegativeCount { action: String, message: String },

    /// A quantity change would exceed the type's effective maximum.
    #[error("{action}: {message}")]
    CapacityExceeded { action: String, message: String },

    /// The targeted inventory record does not exist.
    #[error("{action}: {message}")]
    NullInventory { action: String, message: String },

    /// A requested entity was not found.
    #[error("{action}: {message}")]
    NotFound { action: String, message: String },

    /// An entity with the same identifier already exists.
    #[error("{action}: {message}")]
    Conflict { action: String, message: String },

    /// A value failed validation.
    #[error("{action}: {message}")]
    Validation { action: String, message: String },

    /// The service is wired incorrectly (e.g. no policy for an inventory type).
    #[error("{action}: {message}")]
    Misconfigured { action: String, message: String },
}

impl StoreError {
    pub fn unauthorized(action: impl Into<String>) -> Self {
        Self::Unauthorized {
            action: action.into(),
        }
    }

    pub fn type_mismatch(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn negative_count(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NegativeCount {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn capacity_exceeded(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CapacityExceeded {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn null_inventory(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NullInventory {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn not_found(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn conflict(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn validation(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            action: action.into(),
            message: message.into(),
        }
    }

    pub fn misconfigured(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Misconfigured {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Name of the operation that produced this error.
    pub fn action(&self) -> &str {
        match self {
            Self::Unauthorized { action }
            | Self::TypeMismatch { action, .. }
            | Self::NegativeCount { action, .. }
            | Self::CapacityExceeded { action, .. }
            | Self::NullInventory { action, .. }
            | Self::NotFound { action, .. }
            | Self::Conflict { action, .. }
            | Self::Validation { action, .. }
            | Self::Misconfigured { action, .. } => action,
        }
    }
}
