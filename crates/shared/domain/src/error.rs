//! Domain-level errors.
//!
//! The shapes themselves never fail; the only fallible domain operation is
//! resolving a shape by name.

use thiserror::Error;

/// Errors raised by the contract catalogue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No contract is registered under the given name
    #[error("Unknown shape: {0}")]
    UnknownShape(String),
}

impl DomainError {
    /// Create an unknown shape error
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        DomainError::UnknownShape(name.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
