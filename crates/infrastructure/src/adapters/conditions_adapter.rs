//! Conditions adapters - Implement WeatherPort and TrafficPort using integration_conditions

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{TrafficPort, WeatherPort};
use async_trait::async_trait;
use domain::entities::{TrafficSnapshot, WeatherSnapshot};
use domain::value_objects::GeoLocation;
use integration_conditions::{
    BackendTrafficClient, BackendWeatherClient, ConditionsConfig, ConditionsError, TrafficClient,
    WeatherClient,
};
use tracing::instrument;

fn map_error(service: &str, error: ConditionsError) -> ApplicationError {
    if error.is_transport() {
        ApplicationError::ExternalService(format!("{service}: {error}"))
    } else {
        ApplicationError::Unavailable(format!("{service}: {error}"))
    }
}

/// Adapter for current weather through the route display backend
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    #[must_use]
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Create an adapter backed by [`BackendWeatherClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &ConditionsConfig) -> Result<Self, ConditionsError> {
        Ok(Self::new(Arc::new(BackendWeatherClient::new(config)?)))
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        self.client
            .current(location.latitude(), location.longitude())
            .await
            .map_err(|e| map_error("weather", e))
    }
}

/// Adapter for the traffic snapshot through the route display backend
pub struct TrafficAdapter {
    client: Arc<dyn TrafficClient>,
}

impl std::fmt::Debug for TrafficAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficAdapter").finish_non_exhaustive()
    }
}

impl TrafficAdapter {
    #[must_use]
    pub fn new(client: Arc<dyn TrafficClient>) -> Self {
        Self { client }
    }

    /// Create an adapter backed by [`BackendTrafficClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &ConditionsConfig) -> Result<Self, ConditionsError> {
        Ok(Self::new(Arc::new(BackendTrafficClient::new(config)?)))
    }
}

#[async_trait]
impl TrafficPort for TrafficAdapter {
    #[instrument(skip(self))]
    async fn traffic_snapshot(&self) -> Result<TrafficSnapshot, ApplicationError> {
        self.client
            .snapshot()
            .await
            .map_err(|e| map_error("traffic", e))
    }
}
