//! Routing adapters - Implement GeocoderPort and RoutePlannerPort using integration_routing

use std::sync::Arc;

use application::ports::{
    GeocodeFailure, GeocoderPort, RouteOutcome, RoutePlannerPort, RoutePlanningError, RouteRequest,
};
use async_trait::async_trait;
use domain::entities::WeatherSnapshot;
use domain::value_objects::GeoLocation;
use integration_conditions::WeatherPayload;
use integration_routing::{
    BackendGeocodingClient, BackendRouteClient, GeocodingClient, GeocodingError, RouteClient,
    RouteResponse, RoutingConfig, RoutingError,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Adapter for address geocoding through the route display backend
pub struct GeocoderAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocoderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderAdapter").finish_non_exhaustive()
    }
}

impl GeocoderAdapter {
    /// Wrap an existing geocoding client
    #[must_use]
    pub fn new(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Create an adapter backed by [`BackendGeocodingClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, GeocodingError> {
        Ok(Self::new(Arc::new(BackendGeocodingClient::new(config)?)))
    }

    fn map_error(error: GeocodingError) -> GeocodeFailure {
        if error.is_transport() {
            GeocodeFailure::Transport(error.to_string())
        } else {
            GeocodeFailure::NotFound(error.to_string())
        }
    }
}

#[async_trait]
impl GeocoderPort for GeocoderAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodeFailure> {
        self.client.geocode(address).await.map_err(|e| {
            debug!(error = %e, "Geocoding failed");
            Self::map_error(e)
        })
    }
}

/// Adapter for route planning through the route display backend
pub struct RoutePlannerAdapter {
    client: Arc<dyn RouteClient>,
}

impl std::fmt::Debug for RoutePlannerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlannerAdapter").finish_non_exhaustive()
    }
}

impl RoutePlannerAdapter {
    /// Wrap an existing route client
    #[must_use]
    pub fn new(client: Arc<dyn RouteClient>) -> Self {
        Self { client }
    }

    /// Create an adapter backed by [`BackendRouteClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, RoutingError> {
        Ok(Self::new(Arc::new(BackendRouteClient::new(config)?)))
    }

    fn map_error(error: RoutingError) -> RoutePlanningError {
        match error {
            RoutingError::PlanningFailed(reason) => RoutePlanningError::Rejected(reason),
            other => RoutePlanningError::Transport(other.to_string()),
        }
    }

    /// Advisory weather is informational; an unreadable payload is dropped
    fn convert_weather(weather: Option<Value>) -> Option<WeatherSnapshot> {
        let value = weather?;
        match WeatherPayload::from_value(value) {
            Ok(payload) => Some(payload.into()),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable advisory weather");
                None
            },
        }
    }
}

#[async_trait]
impl RoutePlannerPort for RoutePlannerAdapter {
    #[instrument(skip(self), fields(consider_weather = request.consider_weather))]
    async fn plan_route(&self, request: RouteRequest) -> Result<RouteOutcome, RoutePlanningError> {
        let response = self
            .client
            .plan_route(&request.start, &request.end, request.consider_weather)
            .await
            .map_err(Self::map_error)?;

        Ok(match response {
            RouteResponse::Route(plan) => RouteOutcome::Planned(plan),
            RouteResponse::Advisory { warning, weather } => RouteOutcome::Advisory {
                warning,
                weather: Self::convert_weather(weather),
            },
        })
    }
}
