//! Value Objects - Immutable, identity-less domain primitives

mod geo_bounds;
mod geo_location;
mod route_endpoint;

pub use geo_bounds::GeoBounds;
pub use geo_location::GeoLocation;
pub use route_endpoint::RouteEndpoint;
