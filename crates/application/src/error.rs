//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the condition ports and configuration wiring
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service could not be reached or answered garbage
    #[error("External service error: {0}")]
    ExternalService(String),

    /// External service answered, but without usable data
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the failure happened on the wire rather than in the service
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}
