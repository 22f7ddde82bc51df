//! Backend geocoding client
//!
//! Converts free-form address strings to coordinates through the backend's
//! `GET /geocode?address=` endpoint. One request per call, no retry, no cache.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::RoutingConfig;
use crate::models::{GeocodeResponse, is_success_status, rejection_reason};

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

impl GeocodingError {
    /// True unless the service answered that the address does not exist
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        !matches!(self, Self::AddressNotFound(_))
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodingError>;
}

/// Geocoding client for the route display backend
#[derive(Debug)]
pub struct BackendGeocodingClient {
    client: Client,
    config: RoutingConfig,
}

impl BackendGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Interpret a decoded response body
    fn parse_response(
        address: &str,
        body: GeocodeResponse,
    ) -> Result<GeoLocation, GeocodingError> {
        if !is_success_status(&body.status) {
            let reason = body
                .error
                .or(body.message)
                .unwrap_or_else(|| address.to_string());
            return Err(GeocodingError::AddressNotFound(reason));
        }

        let location = body
            .location
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        GeoLocation::new(location.latitude, location.longitude)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for BackendGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let url = self.config.endpoint("geocode");
        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&[("address", address)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // A reachable backend may refuse an address with a 4xx and a reason
            if status.is_client_error() {
                let body = response.text().await.unwrap_or_default();
                if let Some(reason) = rejection_reason(&body) {
                    debug!(%status, %reason, "Geocoding endpoint rejected the address");
                    return Err(GeocodingError::AddressNotFound(reason));
                }
            }
            warn!(%status, "Geocoding endpoint returned an error status");
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let location = Self::parse_response(address, body)?;
        debug!(%address, %location, "Geocoded address");
        Ok(location)
    }
}
