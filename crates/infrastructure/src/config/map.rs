//! Map provider configuration

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which map adapter renders overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    /// GeoJSON feature collection, optionally written to a file
    #[default]
    GeoJson,
    /// Records calls without rendering
    Recording,
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeoJson => write!(f, "geojson"),
            Self::Recording => write!(f, "recording"),
        }
    }
}

/// Map settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub provider: MapProvider,

    /// Where the GeoJSON provider writes its collection
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Viewport padding as a fraction of the fitted span (0.0 - 1.0)
    #[serde(default = "default_fit_padding")]
    pub fit_padding: f64,
}

const fn default_fit_padding() -> f64 {
    0.1
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            provider: MapProvider::default(),
            output_path: None,
            fit_padding: default_fit_padding(),
        }
    }
}

impl MapConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the padding is outside 0.0 - 1.0.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.fit_padding) {
            return Err(format!(
                "fit_padding must be between 0.0 and 1.0, got {}",
                self.fit_padding
            ));
        }
        Ok(())
    }
}
