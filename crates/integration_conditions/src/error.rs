//! Conditions client error types

use thiserror::Error;

/// Errors returned by the weather and traffic clients
#[derive(Debug, Error)]
pub enum ConditionsError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The backend answered with a failure status
    #[error("Service reported failure: {0}")]
    Unavailable(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

impl ConditionsError {
    /// True when the backend could not be reached or answered garbage
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ParseError(_)
                | Self::Timeout { .. }
        )
    }
}
