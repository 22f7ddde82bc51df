//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! integration crates, plus map rendering, configuration and logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, BackendConfig, ConfigError, GeoLocationConfig, MapConfig, MapProvider,
    RouteSettings,
};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
