//! Domain error model.

use thiserror::Error;

/// Result type used across the domain foundation.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error shared by every module.
///
/// Module-specific failures (validation, uniqueness) live in the module's own
/// error type, which wraps this one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An identifier could not be generated.
    #[error("failed to generate identifier: {0}")]
    IdGeneration(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn id_generation(msg: impl Into<String>) -> Self {
        Self::IdGeneration(msg.into())
    }
}
