//! Application services - Use case implementations

mod route_display_service;

pub use route_display_service::{
    ConditionsReport, DisplayedRoute, RouteDisplayConfig, RouteDisplayService, RouteError,
};
