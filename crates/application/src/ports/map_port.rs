//! Map rendering port
//!
//! The capability set every map provider must offer. Exactly one
//! implementation is active per deployment, chosen by configuration.

use std::fmt;

use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Opaque reference to a marker placed on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);

/// Opaque reference to a polyline drawn on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathHandle(pub u64);

impl fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

impl fmt::Display for PathHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path#{}", self.0)
    }
}

/// Port for map overlays and viewport control
///
/// Calls are synchronous; rendering is local and never awaits the network.
#[cfg_attr(test, automock)]
pub trait MapPort: Send + Sync {
    /// Place a labelled marker
    fn add_marker(&self, location: &GeoLocation, label: &str) -> MarkerHandle;

    /// Draw a polyline through the points in order
    fn draw_path(&self, points: &[GeoLocation]) -> PathHandle;

    /// Remove every marker and path
    fn clear_overlays(&self);

    /// Move the viewport so every point is visible
    fn fit_to_bounds(&self, points: &[GeoLocation]);
}
