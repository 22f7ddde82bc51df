//! GeoJSON map adapter
//!
//! Renders overlays into a GeoJSON `FeatureCollection`: markers become `Point`
//! features, paths become `LineString` features, and the viewport is kept as
//! the collection's `bbox`. When an output path is configured the collection
//! is rewritten after every mutation so any GeoJSON viewer can follow along.

use std::path::{Path, PathBuf};

use application::ports::{MapPort, MarkerHandle, PathHandle};
use domain::value_objects::{GeoBounds, GeoLocation};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Smallest padding in degrees, so a single point still gets a usable viewport
const MIN_VIEWPORT_PADDING_DEG: f64 = 0.005;

#[derive(Debug, Default)]
struct Overlays {
    next_id: u64,
    markers: Vec<(MarkerHandle, GeoLocation, String)>,
    paths: Vec<(PathHandle, Vec<GeoLocation>)>,
    viewport: Option<GeoBounds>,
}

impl Overlays {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Map adapter that keeps overlays as GeoJSON features
#[derive(Debug)]
pub struct GeoJsonMapAdapter {
    overlays: Mutex<Overlays>,
    fit_padding: f64,
    output_path: Option<PathBuf>,
}

impl GeoJsonMapAdapter {
    /// Create an in-memory adapter
    #[must_use]
    pub fn new(fit_padding: f64) -> Self {
        Self {
            overlays: Mutex::new(Overlays::default()),
            fit_padding,
            output_path: None,
        }
    }

    /// Rewrite the collection to `path` after every change
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Current viewport, `None` until the first fit
    #[must_use]
    pub fn viewport(&self) -> Option<GeoBounds> {
        self.overlays.lock().viewport
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.overlays.lock().markers.len()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.overlays.lock().paths.len()
    }

    /// Render all overlays as a GeoJSON `FeatureCollection`
    #[must_use]
    pub fn feature_collection(&self) -> FeatureCollection {
        Self::render(&self.overlays.lock())
    }

    fn feature(id: String, value: geojson::Value, properties: JsonObject) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(value)),
            id: Some(Id::String(id)),
            properties: Some(properties),
            foreign_members: None,
        }
    }

    fn render(overlays: &Overlays) -> FeatureCollection {
        let markers = overlays.markers.iter().map(|(handle, location, label)| {
            let mut properties = JsonObject::new();
            properties.insert("kind".to_string(), "marker".into());
            properties.insert("label".to_string(), label.as_str().into());
            Self::feature(
                format!("marker-{}", handle.0),
                geojson::Value::Point(location.to_lng_lat().to_vec()),
                properties,
            )
        });

        let paths = overlays.paths.iter().map(|(handle, points)| {
            let mut properties = JsonObject::new();
            properties.insert("kind".to_string(), "route".into());
            properties.insert("points".to_string(), points.len().into());
            let line = points.iter().map(|p| p.to_lng_lat().to_vec()).collect();
            Self::feature(
                format!("path-{}", handle.0),
                geojson::Value::LineString(line),
                properties,
            )
        });

        FeatureCollection {
            bbox: overlays
                .viewport
                .map(|b| vec![b.west, b.south, b.east, b.north]),
            features: markers.chain(paths).collect(),
            foreign_members: None,
        }
    }

    fn persist(&self, overlays: &Overlays) {
        let Some(path) = &self.output_path else {
            return;
        };

        let result = serde_json::to_vec_pretty(&Self::render(overlays))
            .map_err(std::io::Error::other)
            .and_then(|bytes| std::fs::write(path, bytes));
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "Failed to write GeoJSON map");
        }
    }
}

impl MapPort for GeoJsonMapAdapter {
    fn add_marker(&self, location: &GeoLocation, label: &str) -> MarkerHandle {
        let mut overlays = self.overlays.lock();
        let handle = MarkerHandle(overlays.allocate());
        overlays.markers.push((handle, *location, label.to_string()));
        debug!(%handle, %location, label, "Marker added");
        self.persist(&overlays);
        handle
    }

    fn draw_path(&self, points: &[GeoLocation]) -> PathHandle {
        let mut overlays = self.overlays.lock();
        let handle = PathHandle(overlays.allocate());
        overlays.paths.push((handle, points.to_vec()));
        debug!(%handle, points = points.len(), "Path drawn");
        self.persist(&overlays);
        handle
    }

    fn clear_overlays(&self) {
        let mut overlays = self.overlays.lock();
        overlays.markers.clear();
        overlays.paths.clear();
        self.persist(&overlays);
    }

    fn fit_to_bounds(&self, points: &[GeoLocation]) {
        let Some(bounds) = GeoBounds::from_points(points) else {
            return;
        };
        let mut overlays = self.overlays.lock();
        overlays.viewport = Some(bounds.padded(self.fit_padding, MIN_VIEWPORT_PADDING_DEG));
        self.persist(&overlays);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lng: f64) -> GeoLocation {
        GeoLocation::new(lat, lng).unwrap()
    }

    fn path() -> Vec<GeoLocation> {
        vec![loc(39.90, 116.40), loc(39.95, 116.45), loc(40.00, 116.50)]
    }

    #[test]
    fn route_renders_three_features() {
        let map = GeoJsonMapAdapter::new(0.1);
        map.add_marker(&loc(1.0, 1.0), "old");
        map.clear_overlays();

        let points = path();
        map.add_marker(&points[0], "start");
        map.add_marker(&points[2], "end");
        map.draw_path(&points);
        map.fit_to_bounds(&points);

        let collection = map.feature_collection();
        let features = &collection.features;
        assert_eq!(features.len(), 3);
        assert!(matches!(
            features[0].geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::Point(_))
        ));
        assert_eq!(features[0].property("label"), Some(&"start".into()));
        match features[2].geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::LineString(line)) => {
                assert_eq!(line.len(), 3);
                assert_eq!(line[0], vec![116.40, 39.90]);
            },
            other => panic!("expected a LineString, got {other:?}"),
        }

        let viewport = map.viewport().unwrap();
        assert!(points.iter().all(|p| viewport.contains(p)));
        assert_eq!(
            collection.bbox,
            Some(vec![viewport.west, viewport.south, viewport.east, viewport.north])
        );
    }

    #[test]
    fn handles_are_unique() {
        let map = GeoJsonMapAdapter::new(0.1);
        let a = map.add_marker(&loc(0.0, 0.0), "a");
        let b = map.add_marker(&loc(0.0, 0.0), "b");
        assert_ne!(a, b);
    }

    #[test]
    fn fit_to_empty_points_keeps_viewport() {
        let map = GeoJsonMapAdapter::new(0.1);
        map.fit_to_bounds(&path());
        let before = map.viewport();
        map.fit_to_bounds(&[]);
        assert_eq!(map.viewport(), before);
    }

    #[test]
    fn single_point_fit_gets_minimum_padding() {
        let map = GeoJsonMapAdapter::new(0.1);
        map.fit_to_bounds(&[loc(10.0, 20.0)]);
        let viewport = map.viewport().unwrap();
        assert!(viewport.north - viewport.south >= 2.0 * MIN_VIEWPORT_PADDING_DEG - 1e-12);
    }

    #[test]
    fn collection_is_written_to_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("route.geojson");
        let map = GeoJsonMapAdapter::new(0.1).with_output_path(&file);

        map.add_marker(&loc(39.9, 116.4), "start");

        let written: FeatureCollection =
            serde_json::from_slice(&std::fs::read(&file).unwrap()).unwrap();
        assert_eq!(written.features.len(), 1);
        assert_eq!(written.features[0].id, Some(Id::String("marker-1".to_string())));
        assert!(written.bbox.is_none());
    }
}
