//! Application configuration
//!
//! Split into focused sub-modules:
//! - `backend`: backend API base URL, timeout, user agent
//! - `map`: map provider and viewport padding
//! - `route`: coordinator settings
//!
//! Telemetry settings live next to the subscriber setup in `telemetry`.

mod backend;
mod map;
mod route;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use backend::BackendConfig;
pub use map::{MapConfig, MapProvider};
pub use route::{GeoLocationConfig, RouteSettings};

use crate::telemetry::TelemetryConfig;

/// Prefix for environment overrides, e.g. `ROUTE_DISPLAY_BACKEND__BASE_URL`
pub const ENV_PREFIX: &str = "ROUTE_DISPLAY";

/// Default configuration file name (any format the `config` crate knows)
pub const DEFAULT_CONFIG_FILE: &str = "route-display";

/// Configuration loading or validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A section holds an unusable value
    #[error("Invalid [{section}] configuration: {reason}")]
    Invalid {
        section: &'static str,
        reason: String,
    },
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub route: RouteSettings,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `route-display.toml` (if present) and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or the default one) and environment
    ///
    /// An explicit file must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., ROUTE_DISPLAY_MAP__PROVIDER)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(
            base_url = %config.backend.base_url,
            provider = %config.map.provider,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |section| move |reason| ConfigError::Invalid { section, reason };

        self.backend.validate().map_err(invalid("backend"))?;
        self.map.validate().map_err(invalid("map"))?;
        self.route.validate().map_err(invalid("route"))?;
        self.telemetry.validate().map_err(invalid("telemetry"))?;
        Ok(())
    }
}
