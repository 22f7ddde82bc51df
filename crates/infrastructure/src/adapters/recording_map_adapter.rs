//! Recording map adapter
//!
//! Renders nothing. Every call is appended to a log so tests can assert on
//! the exact sequence of map operations, and live overlays are tracked so
//! "what is on the map now" can be checked too.

use application::ports::{MapPort, MarkerHandle, PathHandle};
use domain::value_objects::GeoLocation;
use parking_lot::Mutex;

/// One call made against the map
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    AddMarker {
        location: GeoLocation,
        label: String,
        handle: MarkerHandle,
    },
    DrawPath {
        points: Vec<GeoLocation>,
        handle: PathHandle,
    },
    ClearOverlays,
    FitToBounds {
        points: Vec<GeoLocation>,
    },
}

#[derive(Debug, Default)]
struct Recording {
    next_id: u64,
    calls: Vec<MapCall>,
    live_markers: Vec<MarkerHandle>,
    live_paths: Vec<PathHandle>,
}

/// Map adapter that records calls instead of rendering
#[derive(Debug, Default)]
pub struct RecordingMapAdapter {
    recording: Mutex<Recording>,
}

impl RecordingMapAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<MapCall> {
        self.recording.lock().calls.clone()
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.count(|call| matches!(call, MapCall::ClearOverlays))
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.count(|call| matches!(call, MapCall::DrawPath { .. }))
    }

    /// Labels of all markers ever added, in order
    #[must_use]
    pub fn marker_labels(&self) -> Vec<String> {
        self.recording
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                MapCall::AddMarker { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    /// Markers currently on the map
    #[must_use]
    pub fn live_markers(&self) -> Vec<MarkerHandle> {
        self.recording.lock().live_markers.clone()
    }

    /// Paths currently on the map
    #[must_use]
    pub fn live_paths(&self) -> Vec<PathHandle> {
        self.recording.lock().live_paths.clone()
    }

    /// Points of the most recent fit, if any
    #[must_use]
    pub fn last_fit(&self) -> Option<Vec<GeoLocation>> {
        self.recording
            .lock()
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                MapCall::FitToBounds { points } => Some(points.clone()),
                _ => None,
            })
    }

    fn count(&self, pred: impl Fn(&MapCall) -> bool) -> usize {
        self.recording.lock().calls.iter().filter(|c| pred(c)).count()
    }
}

impl MapPort for RecordingMapAdapter {
    fn add_marker(&self, location: &GeoLocation, label: &str) -> MarkerHandle {
        let mut rec = self.recording.lock();
        rec.next_id += 1;
        let handle = MarkerHandle(rec.next_id);
        rec.live_markers.push(handle);
        rec.calls.push(MapCall::AddMarker {
            location: *location,
            label: label.to_string(),
            handle,
        });
        handle
    }

    fn draw_path(&self, points: &[GeoLocation]) -> PathHandle {
        let mut rec = self.recording.lock();
        rec.next_id += 1;
        let handle = PathHandle(rec.next_id);
        rec.live_paths.push(handle);
        rec.calls.push(MapCall::DrawPath {
            points: points.to_vec(),
            handle,
        });
        handle
    }

    fn clear_overlays(&self) {
        let mut rec = self.recording.lock();
        rec.live_markers.clear();
        rec.live_paths.clear();
        rec.calls.push(MapCall::ClearOverlays);
    }

    fn fit_to_bounds(&self, points: &[GeoLocation]) {
        self.recording.lock().calls.push(MapCall::FitToBounds {
            points: points.to_vec(),
        });
    }
}
