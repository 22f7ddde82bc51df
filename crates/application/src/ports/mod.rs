//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod display_port;
mod geocoder_port;
mod map_port;
mod route_planner_port;
mod traffic_port;
mod weather_port;

#[cfg(test)]
pub use display_port::MockDisplayPort;
pub use display_port::{DisplayPort, Notification, NotificationLevel};
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use geocoder_port::{GeocodeFailure, GeocoderPort};
#[cfg(test)]
pub use map_port::MockMapPort;
pub use map_port::{MapPort, MarkerHandle, PathHandle};
#[cfg(test)]
pub use route_planner_port::MockRoutePlannerPort;
pub use route_planner_port::{RouteOutcome, RoutePlannerPort, RoutePlanningError, RouteRequest};
#[cfg(test)]
pub use traffic_port::MockTrafficPort;
pub use traffic_port::TrafficPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
