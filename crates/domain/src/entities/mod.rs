//! Domain entities - route model and display payloads

mod conditions;
mod route_plan;
mod route_summary;

pub use conditions::{CongestionPeak, TrafficRank, TrafficSnapshot, WeatherSnapshot};
pub use route_plan::{MIN_PATH_POINTS, RoutePlan, RouteStep, TravelMode, seconds_to_minutes};
pub use route_summary::{RouteSummary, StepSummary, format_distance, format_duration};
