//! Conditions backend integration
//!
//! Clients for the two read-only condition endpoints of the route display
//! backend: `GET /weather` for the current weather at a coordinate and
//! `GET /traffic` for the city-wide congestion snapshot.
//!
//! The weather payload type is public because the route endpoint embeds the
//! same shape in its advisories.

mod config;
mod error;
mod http;
mod models;
mod traffic;
mod weather;

pub use config::ConditionsConfig;
pub use error::ConditionsError;
pub use models::WeatherPayload;
pub use traffic::{BackendTrafficClient, TrafficClient};
pub use weather::{BackendWeatherClient, WeatherClient};
