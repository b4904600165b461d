//! Domain Errors

use serde::{Deserialize, Serialize};

/// Common result type for memo pad operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// No memo at the requested index or with the requested id
    NotFound(String),
    /// Operation not allowed in the current edit mode
    InvalidState(String),
    /// Refused to delete the only remaining memo
    LastMemo,
    /// Key-value backend failure
    Storage(String),
    /// JSON encode/decode failure
    Serialization(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            DomainError::LastMemo => write!(f, "Cannot delete the last remaining memo"),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
