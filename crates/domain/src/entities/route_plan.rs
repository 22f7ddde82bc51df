//! Route plan returned by the route service
//!
//! A plan is built once per request, rendered, then dropped. Nothing here is
//! persisted between sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{GeoBounds, GeoLocation};

/// Minimum number of path points the map can draw
pub const MIN_PATH_POINTS: usize = 2;

/// Travel mode of a single route step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// On foot
    #[serde(alias = "walking", alias = "foot")]
    Walk,
    /// Bus
    Bus,
    /// Metro / subway
    #[serde(alias = "metro")]
    Subway,
    /// Bicycle or shared bike
    #[serde(alias = "cycling", alias = "bicycle", alias = "shared_bike")]
    Bike,
    /// Private car or taxi
    #[serde(alias = "driving")]
    Car,
    /// Anything the backend sends that we do not know
    #[default]
    #[serde(other)]
    Unknown,
}

impl TravelMode {
    /// Parse a backend mode string, falling back to `Unknown`
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "walk" | "walking" | "foot" => Self::Walk,
            "bus" => Self::Bus,
            "subway" | "metro" => Self::Subway,
            "bike" | "cycling" | "bicycle" | "shared_bike" => Self::Bike,
            "car" | "driving" => Self::Car,
            _ => Self::Unknown,
        }
    }

    /// Emoji representation for step lists
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Walk => "🚶",
            Self::Bus => "🚌",
            Self::Subway => "🚇",
            Self::Bike => "🚲",
            Self::Car => "🚗",
            Self::Unknown => "➡️",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Walk => "Walk",
            Self::Bus => "Bus",
            Self::Subway => "Subway",
            Self::Bike => "Bike",
            Self::Car => "Car",
            Self::Unknown => "Route",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One turn-by-turn instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Instruction text as given by the backend
    pub instruction: String,
    /// Travel mode for this step
    pub mode: TravelMode,
    /// Step length in meters
    pub distance_meters: f64,
    /// Step duration in seconds
    pub duration_seconds: f64,
}

/// A planned route between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Ordered path points from start to end
    pub path: Vec<GeoLocation>,
    /// Total length in meters
    pub distance_meters: f64,
    /// Total duration in seconds
    pub duration_seconds: f64,
    /// Turn-by-turn steps
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

impl RoutePlan {
    /// Check the plan can be drawn
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoutePlan` when the path has fewer than two
    /// points or a negative distance/duration.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.path.len() < MIN_PATH_POINTS {
            return Err(DomainError::InvalidRoutePlan(format!(
                "path has {} point(s), at least {MIN_PATH_POINTS} required",
                self.path.len()
            )));
        }
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !non_negative(self.distance_meters) || !non_negative(self.duration_seconds) {
            return Err(DomainError::InvalidRoutePlan(
                "distance and duration must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Bounding box of the path
    #[must_use]
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(&self.path)
    }

    /// Duration rounded to whole minutes
    #[must_use]
    pub fn duration_minutes(&self) -> u64 {
        seconds_to_minutes(self.duration_seconds)
    }
}

/// Round seconds to the nearest whole minute
#[must_use]
pub fn seconds_to_minutes(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds / 60.0).round() as u64
    } else {
        0
    }
}
