//! Current-weather client

use async_trait::async_trait;
use domain::{GeoLocation, WeatherSnapshot};
use integration_routing::is_success_status;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::ConditionsConfig;
use crate::error::ConditionsError;
use crate::http::{build_client, get_json};
use crate::models::WeatherResponse;

/// Trait for weather clients
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the current weather at a coordinate
    async fn current(&self, latitude: f64, longitude: f64)
    -> Result<WeatherSnapshot, ConditionsError>;
}

/// Weather client for the route display backend
#[derive(Debug)]
pub struct BackendWeatherClient {
    client: Client,
    config: ConditionsConfig,
}

impl BackendWeatherClient {
    /// Create a new weather client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ConditionsConfig) -> Result<Self, ConditionsError> {
        Ok(Self {
            client: build_client(config)?,
            config: config.clone(),
        })
    }

    fn parse_response(response: WeatherResponse) -> Result<WeatherSnapshot, ConditionsError> {
        if !is_success_status(&response.status) {
            return Err(ConditionsError::Unavailable(
                response
                    .error
                    .unwrap_or_else(|| "weather unavailable".to_string()),
            ));
        }

        response
            .weather
            .map(WeatherSnapshot::from)
            .ok_or_else(|| ConditionsError::ParseError("response carried no weather".to_string()))
    }
}

#[async_trait]
impl WeatherClient for BackendWeatherClient {
    #[instrument(skip(self))]
    async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, ConditionsError> {
        if GeoLocation::new(latitude, longitude).is_err() {
            return Err(ConditionsError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        let query = [("lat", latitude.to_string()), ("lon", longitude.to_string())];
        let response: WeatherResponse =
            get_json(&self.client, &self.config, "weather", &query).await?;

        let snapshot = Self::parse_response(response)?;
        debug!(temperature = snapshot.temperature, "Weather received");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_status() {
        let response: WeatherResponse =
            serde_json::from_str(r#"{"status": "0", "error": "provider down"}"#).unwrap();
        let err = BackendWeatherClient::parse_response(response).unwrap_err();
        assert!(matches!(err, ConditionsError::Unavailable(ref m) if m == "provider down"));
    }

    #[test]
    fn test_parse_success_without_weather() {
        let response: WeatherResponse = serde_json::from_str(r#"{"status": "1"}"#).unwrap();
        assert!(matches!(
            BackendWeatherClient::parse_response(response),
            Err(ConditionsError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_coordinates_rejected_locally() {
        let client = BackendWeatherClient::new(&ConditionsConfig::for_testing("http://127.0.0.1:9"))
            .unwrap();
        let err = client.current(120.0, 0.0).await.unwrap_err();
        assert!(matches!(err, ConditionsError::InvalidCoordinates { .. }));
    }
}
