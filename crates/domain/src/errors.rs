//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// An argument violated a precondition before any work was done
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
