//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every precondition violation in the CRM and Sales models surfaces as
/// `InvalidArgument`, raised synchronously by the constructor or method that
/// detected it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument violated a precondition (blank text, nil identifier,
    /// negative amount, currency mismatch, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Human-readable message without the error-kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) => msg,
        }
    }
}

/// Fails with `InvalidArgument("{field} cannot be null or blank")` when `value`
/// is empty or whitespace only.
pub fn ensure_not_blank(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "{field} cannot be null or blank"
        )));
    }
    Ok(())
}
