//! Route display coordinator
//!
//! Turns two free-form addresses into a route on the map:
//! geocode both ends concurrently, ask the route service for a plan while
//! fetching the weather at the start, then draw markers and the path and
//! show the summary.
//!
//! Every call takes a request token from a monotonically increasing counter.
//! Only the call holding the latest token may touch the map, the display or
//! the current-route slot. Older calls finish with [`RouteError::Superseded`]
//! and leave no trace.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::entities::{RouteSummary, TrafficSnapshot, WeatherSnapshot};
use domain::value_objects::{GeoLocation, RouteEndpoint};
use domain::DomainError;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{
    DisplayPort, GeocodeFailure, GeocoderPort, MapPort, MarkerHandle, Notification, PathHandle,
    RouteOutcome, RoutePlannerPort, RouteRequest, TrafficPort, WeatherPort,
};

/// Failures of a plan-and-display request
///
/// Every variant except [`RouteError::Superseded`] is reported to the user
/// as a single error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// One of the address fields was blank
    #[error("Please enter a {side} address")]
    EmptyInput { side: RouteEndpoint },

    /// The geocoder does not know the address
    #[error("Could not find the {side} address \"{address}\"")]
    GeocodeNotFound {
        side: RouteEndpoint,
        address: String,
    },

    /// The geocoder could not be reached
    #[error("Could not look up the {side} address: {message}")]
    GeocodeTransportError {
        side: RouteEndpoint,
        message: String,
    },

    /// The route service could not produce a route
    #[error("Route planning failed: {0}")]
    RoutePlanningFailed(String),

    /// The route service produced something that cannot be drawn
    #[error("Invalid route plan: {0}")]
    InvalidRoutePlan(String),

    /// A newer request was issued before this one finished
    #[error("Request {token} was superseded by a newer request")]
    Superseded { token: u64 },
}

impl RouteError {
    /// Which end of the route the error refers to, if any
    #[must_use]
    pub const fn side(&self) -> Option<RouteEndpoint> {
        match self {
            Self::EmptyInput { side }
            | Self::GeocodeNotFound { side, .. }
            | Self::GeocodeTransportError { side, .. } => Some(*side),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }

    fn from_geocode(side: RouteEndpoint, address: &str, failure: GeocodeFailure) -> Self {
        match failure {
            GeocodeFailure::NotFound(_) => Self::GeocodeNotFound {
                side,
                address: address.to_string(),
            },
            GeocodeFailure::Transport(message) => Self::GeocodeTransportError { side, message },
        }
    }
}

impl From<DomainError> for RouteError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidRoutePlan(reason) => Self::InvalidRoutePlan(reason),
            other => Self::InvalidRoutePlan(other.to_string()),
        }
    }
}

/// Configuration for the route display coordinator
#[derive(Debug, Clone)]
pub struct RouteDisplayConfig {
    /// Forwarded to the route service with every request
    pub consider_weather: bool,
    /// Used by [`RouteDisplayService::refresh_conditions`] when no location is given
    pub default_location: GeoLocation,
}

impl Default for RouteDisplayConfig {
    fn default() -> Self {
        Self {
            consider_weather: true,
            default_location: GeoLocation::beijing(),
        }
    }
}

/// The route currently shown on the map
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedRoute {
    /// Token of the request that drew it
    pub token: u64,
    pub start: GeoLocation,
    pub end: GeoLocation,
    /// Start marker first, end marker second
    pub markers: Vec<MarkerHandle>,
    /// `None` for advisory results
    pub path: Option<PathHandle>,
    pub summary: RouteSummary,
}

/// Result of a conditions refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionsReport {
    pub weather: Option<WeatherSnapshot>,
    pub traffic: Option<TrafficSnapshot>,
    /// One message per failed lookup, as notified to the user
    pub failures: Vec<String>,
}

impl ConditionsReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

struct Resolved {
    start: GeoLocation,
    end: GeoLocation,
    outcome: RouteOutcome,
}

/// Coordinates geocoding, route planning and rendering
pub struct RouteDisplayService {
    geocoder: Arc<dyn GeocoderPort>,
    planner: Arc<dyn RoutePlannerPort>,
    map: Arc<dyn MapPort>,
    display: Arc<dyn DisplayPort>,
    weather: Option<Arc<dyn WeatherPort>>,
    traffic: Option<Arc<dyn TrafficPort>>,
    config: RouteDisplayConfig,
    latest_token: AtomicU64,
    current: Mutex<Option<DisplayedRoute>>,
}

impl std::fmt::Debug for RouteDisplayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDisplayService")
            .field("config", &self.config)
            .field("latest_token", &self.latest_token())
            .field("has_weather", &self.weather.is_some())
            .field("has_traffic", &self.traffic.is_some())
            .finish_non_exhaustive()
    }
}

impl RouteDisplayService {
    /// Create a new coordinator
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn GeocoderPort>,
        planner: Arc<dyn RoutePlannerPort>,
        map: Arc<dyn MapPort>,
        display: Arc<dyn DisplayPort>,
        config: RouteDisplayConfig,
    ) -> Self {
        Self {
            geocoder,
            planner,
            map,
            display,
            weather: None,
            traffic: None,
            config,
            latest_token: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Attach a weather port for [`Self::refresh_conditions`] and route requests
    #[must_use]
    pub fn with_weather(mut self, weather: Arc<dyn WeatherPort>) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Attach a traffic port for [`Self::refresh_conditions`]
    #[must_use]
    pub fn with_traffic(mut self, traffic: Arc<dyn TrafficPort>) -> Self {
        self.traffic = Some(traffic);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &RouteDisplayConfig {
        &self.config
    }

    /// Token of the most recently issued request (0 before the first one)
    #[must_use]
    pub fn latest_token(&self) -> u64 {
        self.latest_token.load(Ordering::SeqCst)
    }

    /// The route currently shown on the map, if any
    #[must_use]
    pub fn current_route(&self) -> Option<DisplayedRoute> {
        self.current.lock().clone()
    }

    fn is_current(&self, token: u64) -> bool {
        self.latest_token() == token
    }

    fn ensure_current(&self, token: u64) -> Result<(), RouteError> {
        if self.is_current(token) {
            Ok(())
        } else {
            Err(RouteError::Superseded { token })
        }
    }

    /// Geocode both addresses, plan a route and draw it
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] for blank input, unknown or unreachable
    /// geocoding, a failed or undrawable plan, or when a newer request
    /// superseded this one. Advisories are not errors: they return a
    /// degraded summary.
    #[instrument(skip(self), fields(token = tracing::field::Empty))]
    pub async fn plan_and_display(
        &self,
        start_text: &str,
        end_text: &str,
    ) -> Result<RouteSummary, RouteError> {
        let start_text = start_text.trim();
        let end_text = end_text.trim();

        let blank = if start_text.is_empty() {
            Some(RouteEndpoint::Start)
        } else if end_text.is_empty() {
            Some(RouteEndpoint::End)
        } else {
            None
        };
        if let Some(side) = blank {
            let err = RouteError::EmptyInput { side };
            self.display.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::Span::current().record("token", token);
        self.display.set_loading(true);

        let result = match self.resolve(token, start_text, end_text).await {
            Ok(resolved) => self.render(token, start_text, end_text, resolved),
            Err(err) => Err(err),
        };

        // Same lock as render, so a newer request cannot slip in between
        // the staleness check and the notification
        let guard = self.current.lock();
        let result = match result {
            Err(err) if !err.is_superseded() && !self.is_current(token) => {
                debug!(error = %err, "Dropping failure of a superseded request");
                Err(RouteError::Superseded { token })
            },
            other => other,
        };

        match &result {
            Ok(summary) => info!(degraded = summary.degraded, "Route request finished"),
            Err(RouteError::Superseded { .. }) => debug!("Route request superseded"),
            Err(err) => {
                warn!(error = %err, "Route request failed");
                self.display.notify(Notification::error(err.to_string()));
            },
        }

        if self.is_current(token) {
            self.display.set_loading(false);
        }
        drop(guard);

        result
    }

    async fn resolve(
        &self,
        token: u64,
        start_text: &str,
        end_text: &str,
    ) -> Result<Resolved, RouteError> {
        let (start, end) = tokio::join!(
            self.geocoder.geocode(start_text),
            self.geocoder.geocode(end_text)
        );
        let start =
            start.map_err(|f| RouteError::from_geocode(RouteEndpoint::Start, start_text, f))?;
        let end = end.map_err(|f| RouteError::from_geocode(RouteEndpoint::End, end_text, f))?;
        debug!(%start, %end, "Both addresses geocoded");

        self.ensure_current(token)?;

        let request = RouteRequest {
            start,
            end,
            consider_weather: self.config.consider_weather,
        };
        let (outcome, weather) = tokio::join!(
            self.planner.plan_route(request),
            self.weather_at(&start)
        );
        if let Some(weather) = weather {
            self.show_start_weather(token, weather);
        }
        let outcome = outcome.map_err(|e| RouteError::RoutePlanningFailed(e.to_string()))?;

        Ok(Resolved {
            start,
            end,
            outcome,
        })
    }

    async fn weather_at(
        &self,
        location: &GeoLocation,
    ) -> Option<Result<WeatherSnapshot, ApplicationError>> {
        match &self.weather {
            Some(port) => Some(port.current_weather(location).await),
            None => None,
        }
    }

    /// Show the weather at the route start if the request is still current
    ///
    /// A failed lookup is a warning, not an error: the route goes on.
    fn show_start_weather(&self, token: u64, weather: Result<WeatherSnapshot, ApplicationError>) {
        let _guard = self.current.lock();
        if !self.is_current(token) {
            debug!("Dropping start weather of a superseded request");
            return;
        }
        match weather {
            Ok(snapshot) => self.display.show_weather(&snapshot),
            Err(e) => {
                warn!(error = %e, "Weather at route start unavailable");
                self.display
                    .notify(Notification::warning(format!("Failed to fetch weather: {e}")));
            },
        }
    }

    /// Apply a resolved outcome to the map and display
    ///
    /// Runs under the current-route lock so two finishing requests cannot
    /// interleave their map calls.
    fn render(
        &self,
        token: u64,
        start_text: &str,
        end_text: &str,
        resolved: Resolved,
    ) -> Result<RouteSummary, RouteError> {
        let mut current = self.current.lock();
        self.ensure_current(token)?;

        let Resolved {
            start,
            end,
            outcome,
        } = resolved;

        match outcome {
            RouteOutcome::Planned(plan) => {
                plan.validate()?;

                self.map.clear_overlays();
                let markers = vec![
                    self.map.add_marker(&start, start_text),
                    self.map.add_marker(&end, end_text),
                ];
                let path = self.map.draw_path(&plan.path);
                self.map.fit_to_bounds(&plan.path);

                let summary = RouteSummary::from_plan(&plan);
                self.display.show_route(&summary);

                *current = Some(DisplayedRoute {
                    token,
                    start,
                    end,
                    markers,
                    path: Some(path),
                    summary: summary.clone(),
                });
                Ok(summary)
            },
            RouteOutcome::Advisory { warning, weather } => {
                self.map.clear_overlays();
                let markers = vec![
                    self.map.add_marker(&start, start_text),
                    self.map.add_marker(&end, end_text),
                ];

                self.display.clear_route();
                self.display.notify(Notification::warning(warning.clone()));
                if let Some(weather) = &weather {
                    self.display.show_weather(weather);
                }

                let summary = RouteSummary::degraded(warning);
                *current = Some(DisplayedRoute {
                    token,
                    start,
                    end,
                    markers,
                    path: None,
                    summary: summary.clone(),
                });
                Ok(summary)
            },
        }
    }

    /// Fetch weather and traffic concurrently and show whatever arrives
    ///
    /// Never fails as a whole; each failed lookup is notified on its own and
    /// listed in the report.
    #[instrument(skip(self))]
    pub async fn refresh_conditions(&self, location: Option<GeoLocation>) -> ConditionsReport {
        let location = location.unwrap_or(self.config.default_location);

        let weather = self.weather_at(&location);
        let traffic = async {
            match &self.traffic {
                Some(port) => Some(port.traffic_snapshot().await),
                None => None,
            }
        };
        let (weather, traffic) = tokio::join!(weather, traffic);

        let mut report = ConditionsReport::default();

        match weather {
            Some(Ok(snapshot)) => {
                self.display.show_weather(&snapshot);
                report.weather = Some(snapshot);
            },
            Some(Err(e)) => {
                let message = format!("Failed to fetch weather: {e}");
                warn!(error = %e, "Weather refresh failed");
                self.display.notify(Notification::error(message.clone()));
                report.failures.push(message);
            },
            None => debug!("No weather port configured"),
        }

        match traffic {
            Some(Ok(snapshot)) => {
                self.display.show_traffic(&snapshot);
                report.traffic = Some(snapshot);
            },
            Some(Err(e)) => {
                let message = format!("Failed to fetch traffic: {e}");
                warn!(error = %e, "Traffic refresh failed");
                self.display.notify(Notification::error(message.clone()));
                report.failures.push(message);
            },
            None => debug!("No traffic port configured"),
        }

        report
    }
}
