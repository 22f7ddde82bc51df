//! Property-based tests for domain value objects and formatting rules
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::entities::{RoutePlan, format_distance, format_duration, seconds_to_minutes};
use domain::value_objects::{GeoBounds, GeoLocation};
use proptest::prelude::*;

fn location() -> impl Strategy<Value = GeoLocation> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeoLocation::new_unchecked(lat, lng))
}

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon);
            prop_assert!(loc.is_ok());

            let loc = loc.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
            prop_assert_eq!(loc.to_lng_lat(), [lon, lat]);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// GeoBounds Property Tests
// ============================================================================

mod geo_bounds_tests {
    use super::*;

    proptest! {
        #[test]
        fn bounds_contain_every_point(points in prop::collection::vec(location(), 1..20)) {
            let bounds = GeoBounds::from_points(&points).unwrap();
            for point in &points {
                prop_assert!(bounds.contains(point));
            }
        }

        #[test]
        fn padding_never_shrinks(
            points in prop::collection::vec(location(), 1..20),
            fraction in 0.0f64..=1.0
        ) {
            let bounds = GeoBounds::from_points(&points).unwrap();
            let padded = bounds.padded(fraction, 0.005);
            prop_assert!(padded.south <= bounds.south);
            prop_assert!(padded.west <= bounds.west);
            prop_assert!(padded.north >= bounds.north);
            prop_assert!(padded.east >= bounds.east);
            prop_assert!(padded.contains(&bounds.center()));
        }
    }
}

// ============================================================================
// Formatting Property Tests
// ============================================================================

mod formatting_tests {
    use super::*;

    proptest! {
        #[test]
        fn short_distances_use_meters(meters in 0.0f64..999.0) {
            prop_assert!(format_distance(meters).ends_with(" m"));
        }

        #[test]
        fn long_distances_use_one_decimal_km(meters in 1000.0f64..1.0e7) {
            let text = format_distance(meters);
            prop_assert!(text.ends_with(" km"));
            let number = text.trim_end_matches(" km");
            prop_assert_eq!(number.split('.').nth(1).map(str::len), Some(1));
        }

        #[test]
        fn duration_splits_hours_and_minutes(minutes in 0u64..100_000) {
            let text = format_duration(minutes);
            if minutes < 60 {
                prop_assert_eq!(text, format!("{minutes} min"));
            } else {
                prop_assert_eq!(text, format!("{} h {} min", minutes / 60, minutes % 60));
            }
        }

        #[test]
        fn minutes_round_to_nearest(seconds in 0.0f64..1.0e6) {
            let minutes = seconds_to_minutes(seconds) as f64;
            prop_assert!((minutes * 60.0 - seconds).abs() <= 30.0 + 1e-6);
        }
    }
}

// ============================================================================
// RoutePlan Property Tests
// ============================================================================

mod route_plan_tests {
    use super::*;

    proptest! {
        #[test]
        fn plans_with_two_points_validate(
            path in prop::collection::vec(location(), 2..50),
            distance in 0.0f64..1.0e6,
            duration in 0.0f64..1.0e6
        ) {
            let plan = RoutePlan {
                path,
                distance_meters: distance,
                duration_seconds: duration,
                steps: vec![],
            };
            prop_assert!(plan.validate().is_ok());
            prop_assert!(plan.bounds().is_some());
        }

        #[test]
        fn short_paths_are_rejected(path in prop::collection::vec(location(), 0..2)) {
            let plan = RoutePlan {
                path,
                distance_meters: 1.0,
                duration_seconds: 1.0,
                steps: vec![],
            };
            prop_assert!(plan.validate().is_err());
        }
    }
}
