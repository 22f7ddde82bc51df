//! Route planning error types

use thiserror::Error;

/// Errors that can occur while requesting a route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the route service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the route service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service answered but could not plan a route
    #[error("Route planning failed: {0}")]
    PlanningFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// True when the backend could not be reached or answered garbage
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        !matches!(self, Self::PlanningFailed(_))
    }
}
