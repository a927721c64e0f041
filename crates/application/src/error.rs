//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// None of these are retried inside the core; retries, where desired, belong
/// to the transport layer of the failing collaborator.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation, invalid arguments)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Result-cache I/O fault; fatal for the current request
    #[error("Cache storage error: {0}")]
    Storage(String),

    /// Upstream review-provider call failed
    #[error("Upstream fetch error: {0}")]
    UpstreamFetch(String),

    /// Text-generation call failed; aborts the whole summarization
    #[error("Summarizer error: {0}")]
    Summarizer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
