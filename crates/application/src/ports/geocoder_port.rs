//! Geocoder port
//!
//! Converts a free-form address into coordinates. Adapters in the
//! infrastructure layer implement this over the backend geocoding endpoint.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Why an address could not be geocoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeFailure {
    /// The service answered that the address does not exist
    #[error("address not found: {0}")]
    NotFound(String),

    /// The service could not be reached or answered garbage
    #[error("geocoding unavailable: {0}")]
    Transport(String),
}

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve an address to a single location
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodeFailure>;
}
