//! Bounding box over a set of locations

use serde::{Deserialize, Serialize};

use super::GeoLocation;

/// Axis-aligned bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing all points, `None` for an empty slice
    #[must_use]
    pub fn from_points(points: &[GeoLocation]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            south: first.latitude(),
            west: first.longitude(),
            north: first.latitude(),
            east: first.longitude(),
        };
        Some(points.iter().skip(1).fold(init, |b, p| Self {
            south: b.south.min(p.latitude()),
            west: b.west.min(p.longitude()),
            north: b.north.max(p.latitude()),
            east: b.east.max(p.longitude()),
        }))
    }

    /// Whether the point lies inside (edges inclusive)
    #[must_use]
    pub fn contains(&self, point: &GeoLocation) -> bool {
        (self.south..=self.north).contains(&point.latitude())
            && (self.west..=self.east).contains(&point.longitude())
    }

    /// Grow the box by a fraction of its span on every side
    ///
    /// A degenerate box (single point) grows by `min_span_deg` instead.
    #[must_use]
    pub fn padded(&self, fraction: f64, min_span_deg: f64) -> Self {
        let lat_pad = ((self.north - self.south) * fraction).max(min_span_deg);
        let lng_pad = ((self.east - self.west) * fraction).max(min_span_deg);
        Self {
            south: (self.south - lat_pad).max(-90.0),
            west: (self.west - lng_pad).max(-180.0),
            north: (self.north + lat_pad).min(90.0),
            east: (self.east + lng_pad).min(180.0),
        }
    }

    /// Centre of the box
    #[must_use]
    pub fn center(&self) -> GeoLocation {
        GeoLocation::new_unchecked(
            f64::midpoint(self.south, self.north),
            f64::midpoint(self.west, self.east),
        )
    }
}
