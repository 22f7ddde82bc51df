//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod conditions_adapter;
mod geojson_map_adapter;
mod recording_map_adapter;
mod routing_adapter;

use std::sync::Arc;

use application::ports::MapPort;
use tracing::info;

pub use conditions_adapter::{TrafficAdapter, WeatherAdapter};
pub use geojson_map_adapter::GeoJsonMapAdapter;
pub use recording_map_adapter::{MapCall, RecordingMapAdapter};
pub use routing_adapter::{GeocoderAdapter, RoutePlannerAdapter};

use crate::config::{MapConfig, MapProvider};

/// Build the single map adapter selected by configuration
#[must_use]
pub fn create_map_adapter(config: &MapConfig) -> Arc<dyn MapPort> {
    info!(provider = %config.provider, "Creating map adapter");
    match config.provider {
        MapProvider::GeoJson => {
            let adapter = GeoJsonMapAdapter::new(config.fit_padding);
            match &config.output_path {
                Some(path) => Arc::new(adapter.with_output_path(path)),
                None => Arc::new(adapter),
            }
        },
        MapProvider::Recording => Arc::new(RecordingMapAdapter::new()),
    }
}
