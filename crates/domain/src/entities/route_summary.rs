//! Display-ready route summary and its formatting rules

use std::fmt;

use serde::{Deserialize, Serialize};

use super::route_plan::{RoutePlan, RouteStep, TravelMode, seconds_to_minutes};

/// Distance below which meters are shown instead of kilometers
const KILOMETER_THRESHOLD_M: f64 = 1000.0;

/// Format a distance: whole meters below 1 km, otherwise kilometers with one decimal
///
/// `950.0` becomes `"950 m"`, `1500.0` becomes `"1.5 km"`.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    let meters = if meters.is_finite() { meters.max(0.0) } else { 0.0 };
    let whole = meters.round();
    if whole < KILOMETER_THRESHOLD_M {
        format!("{} m", whole as u64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Format a duration given in minutes
///
/// `45` becomes `"45 min"`, `125` becomes `"2 h 5 min"`.
#[must_use]
pub fn format_duration(minutes: u64) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {} min", minutes / 60, minutes % 60)
    }
}

/// One formatted step for the step list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    /// 1-based position in the route
    pub index: usize,
    pub mode: TravelMode,
    pub instruction: String,
    pub distance_text: String,
    pub duration_text: String,
}

impl StepSummary {
    fn from_step(index: usize, step: &RouteStep) -> Self {
        Self {
            index,
            mode: step.mode,
            instruction: step.instruction.clone(),
            distance_text: format_distance(step.distance_meters),
            duration_text: format_duration(seconds_to_minutes(step.duration_seconds)),
        }
    }

    /// Format as a single detail line
    #[must_use]
    pub fn format_detail(&self) -> String {
        format!(
            "{}. {} {} ({} | {})",
            self.index,
            self.mode.emoji(),
            self.instruction,
            self.distance_text,
            self.duration_text
        )
    }
}

impl fmt::Display for StepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_detail())
    }
}

/// Result of a route display run
///
/// A degraded summary carries an advisory and no route figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_text: String,
    pub duration_text: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub steps: Vec<StepSummary>,
    /// Advisory text from the backend (e.g. a severe-weather warning)
    pub advisory: Option<String>,
    /// True when no route was drawn
    pub degraded: bool,
    /// Number of path points drawn on the map
    pub path_points: usize,
}

impl RouteSummary {
    /// Build the summary for a drawn plan
    #[must_use]
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            distance_text: format_distance(plan.distance_meters),
            duration_text: format_duration(plan.duration_minutes()),
            distance_meters: plan.distance_meters,
            duration_seconds: plan.duration_seconds,
            steps: plan
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| StepSummary::from_step(i + 1, step))
                .collect(),
            advisory: None,
            degraded: false,
            path_points: plan.path.len(),
        }
    }

    /// Build a summary for an advisory-only response
    #[must_use]
    pub fn degraded(advisory: impl Into<String>) -> Self {
        Self {
            distance_text: String::new(),
            duration_text: String::new(),
            distance_meters: 0.0,
            duration_seconds: 0.0,
            steps: Vec::new(),
            advisory: Some(advisory.into()),
            degraded: true,
            path_points: 0,
        }
    }

    /// Compact one-line form
    #[must_use]
    pub fn format_summary(&self) -> String {
        if self.degraded {
            return format!(
                "⚠️ No route: {}",
                self.advisory.as_deref().unwrap_or("advisory")
            );
        }
        format!(
            "🗺️ {} · {} · {} step(s)",
            self.distance_text,
            self.duration_text,
            self.steps.len()
        )
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_summary())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::value_objects::GeoLocation;

    #[test]
    fn distance_below_one_kilometer_in_meters() {
        assert_eq!(format_distance(950.0), "950 m");
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(999.4), "999 m");
    }

    #[test]
    fn distance_from_one_kilometer_in_kilometers() {
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(1500.0), "1.5 km");
        assert_eq!(format_distance(999.6), "1.0 km");
        assert_eq!(format_distance(12_345.0), "12.3 km");
    }

    #[test]
    fn distance_handles_garbage() {
        assert_eq!(format_distance(-5.0), "0 m");
        assert_eq!(format_distance(f64::NAN), "0 m");
    }

    #[test]
    fn duration_below_one_hour() {
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(59), "59 min");
    }

    #[test]
    fn duration_with_hours() {
        assert_eq!(format_duration(60), "1 h 0 min");
        assert_eq!(format_duration(125), "2 h 5 min");
    }

    #[test]
    fn summary_from_plan() {
        let plan = RoutePlan {
            path: vec![
                GeoLocation::new(39.9, 116.4).unwrap(),
                GeoLocation::new(39.95, 116.45).unwrap(),
            ],
            distance_meters: 1500.0,
            duration_seconds: 7500.0,
            steps: vec![RouteStep {
                instruction: "Head north".to_string(),
                mode: TravelMode::Walk,
                distance_meters: 120.0,
                duration_seconds: 90.0,
            }],
        };

        let summary = RouteSummary::from_plan(&plan);
        assert_eq!(summary.distance_text, "1.5 km");
        assert_eq!(summary.duration_text, "2 h 5 min");
        assert_eq!(summary.path_points, 2);
        assert!(!summary.degraded);
        assert_eq!(summary.steps.len(), 1);
        assert_eq!(summary.steps[0].index, 1);
        assert_eq!(summary.steps[0].distance_text, "120 m");
        assert_eq!(summary.steps[0].duration_text, "2 min");
        assert!(summary.steps[0].format_detail().contains("🚶"));
        assert!(summary.format_summary().contains("1.5 km"));
    }

    #[test]
    fn degraded_summary() {
        let summary = RouteSummary::degraded("Severe weather");
        assert!(summary.degraded);
        assert_eq!(summary.path_points, 0);
        assert_eq!(summary.advisory.as_deref(), Some("Severe weather"));
        assert!(summary.to_string().contains("Severe weather"));
    }

    proptest! {
        #[test]
        fn short_distances_are_meters(m in 0.0f64..999.0) {
            prop_assert!(format_distance(m).ends_with(" m"));
        }

        #[test]
        fn long_distances_are_kilometers(m in 1000.0f64..1.0e7) {
            prop_assert!(format_distance(m).ends_with(" km"));
        }

        #[test]
        fn hour_format_round_trips_minutes(minutes in 60u64..10_000) {
            let text = format_duration(minutes);
            let parts: Vec<&str> = text.split_whitespace().collect();
            let hours: u64 = parts[0].parse().unwrap();
            let mins: u64 = parts[2].parse().unwrap();
            prop_assert_eq!(hours * 60 + mins, minutes);
            prop_assert!(mins < 60);
        }
    }
}
