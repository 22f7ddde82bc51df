//! Route coordinator configuration

use application::services::RouteDisplayConfig;
use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

impl Default for GeoLocationConfig {
    fn default() -> Self {
        let beijing = GeoLocation::beijing();
        Self {
            latitude: beijing.latitude(),
            longitude: beijing.longitude(),
        }
    }
}

/// Route request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSettings {
    /// Ask the backend to refuse outdoor routes in severe weather
    #[serde(default = "default_consider_weather")]
    pub consider_weather: bool,

    /// Where conditions are looked up when no location is given
    ///
    /// Configured as inline table: `{ latitude = 39.9042, longitude = 116.4074 }`
    #[serde(default)]
    pub default_location: GeoLocationConfig,
}

const fn default_consider_weather() -> bool {
    true
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            consider_weather: default_consider_weather(),
            default_location: GeoLocationConfig::default(),
        }
    }
}

impl RouteSettings {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the default location is out of range.
    pub fn validate(&self) -> Result<(), String> {
        self.default_location
            .to_geo_location()
            .map(|_| ())
            .ok_or_else(|| {
                format!(
                    "default_location out of range: {}, {}",
                    self.default_location.latitude, self.default_location.longitude
                )
            })
    }

    /// Coordinator settings, falling back to the built-in default location
    #[must_use]
    pub fn display_config(&self) -> RouteDisplayConfig {
        RouteDisplayConfig {
            consider_weather: self.consider_weather,
            default_location: self
                .default_location
                .to_geo_location()
                .unwrap_or_else(GeoLocation::beijing),
        }
    }
}
