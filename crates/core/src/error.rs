//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input failures (validation, bad
/// identifiers). The render pipeline itself never surfaces an error to the
/// end user: it degrades to rendering less.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty product slug).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A currency code was invalid.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_currency(msg: impl Into<String>) -> Self {
        Self::InvalidCurrency(msg.into())
    }
}
