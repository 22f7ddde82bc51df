//! Route planner port
//!
//! Requests a route between two resolved coordinates. The backend may answer
//! with an advisory instead of a route, which is a regular outcome and not an
//! error.

use async_trait::async_trait;
use domain::entities::{RoutePlan, WeatherSnapshot};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// A route request between two resolved endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub start: GeoLocation,
    pub end: GeoLocation,
    /// Ask the backend to refuse outdoor routes in severe weather
    pub consider_weather: bool,
}

/// What the route service answered
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// A drawable route
    Planned(RoutePlan),
    /// No route; a warning and optionally the weather behind it
    Advisory {
        warning: String,
        weather: Option<WeatherSnapshot>,
    },
}

/// Route planning failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutePlanningError {
    /// The service answered but could not plan a route
    #[error("{0}")]
    Rejected(String),

    /// The service could not be reached or answered garbage
    #[error("route service unavailable: {0}")]
    Transport(String),
}

/// Port for route planning
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutePlannerPort: Send + Sync {
    /// Plan a route for the given request
    async fn plan_route(&self, request: RouteRequest) -> Result<RouteOutcome, RoutePlanningError>;
}
