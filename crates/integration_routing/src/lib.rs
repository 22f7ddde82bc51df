//! Routing backend integration
//!
//! HTTP clients for the two routing endpoints of the route display backend:
//! `GET /geocode` turns an address into coordinates, `POST /route` returns a
//! planned route or a weather advisory.
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern used by the other integration
//! crates. [`GeocodingClient`] is implemented by [`BackendGeocodingClient`],
//! [`RouteClient`] by [`BackendRouteClient`]. Both issue exactly one request per
//! call and never retry.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{BackendGeocodingClient, GeocodingClient, RoutingConfig};
//!
//! let config = RoutingConfig::default();
//! let geocoder = BackendGeocodingClient::new(&config)?;
//! let location = geocoder.geocode("Tiananmen Square").await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{BackendRouteClient, RouteClient, RouteResponse};
pub use config::RoutingConfig;
pub use error::RoutingError;
pub use geocoding::{BackendGeocodingClient, GeocodingClient, GeocodingError};
pub use models::is_success_status;
