//! Backend route-planning client
//!
//! Posts two coordinates to `POST /route` and returns either a plan or the
//! advisory the backend sends instead of a plan (e.g. severe weather).

use std::time::Duration;

use async_trait::async_trait;
use domain::{GeoLocation, RoutePlan};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::models::{
    RouteRequestBody, RouteResponseBody, WireLocation, is_success_status, rejection_reason,
};

/// Outcome of a successful call to the route endpoint
#[derive(Debug, Clone)]
pub enum RouteResponse {
    /// A drawable route
    Route(RoutePlan),
    /// No route, but a human-readable warning and optionally the weather behind it
    Advisory {
        warning: String,
        weather: Option<Value>,
    },
}

/// Trait for route service clients
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Request a route between two coordinates
    async fn plan_route(
        &self,
        start: &GeoLocation,
        end: &GeoLocation,
        consider_weather: bool,
    ) -> Result<RouteResponse, RoutingError>;
}

/// Route client for the route display backend
#[derive(Debug)]
pub struct BackendRouteClient {
    client: Client,
    config: RoutingConfig,
}

impl BackendRouteClient {
    /// Create a new route client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw response body into a typed outcome
    fn parse_route_response(body: &str) -> Result<RouteResponse, RoutingError> {
        let raw: RouteResponseBody =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if is_success_status(&raw.status) {
            let route = raw.route.ok_or_else(|| {
                RoutingError::PlanningFailed("response carried no route".to_string())
            })?;
            return route
                .into_plan()
                .map(RouteResponse::Route)
                .map_err(RoutingError::ParseError);
        }

        if let Some(warning) = raw.warning.filter(|w| !w.trim().is_empty()) {
            return Ok(RouteResponse::Advisory {
                warning,
                weather: raw.weather,
            });
        }

        Err(RoutingError::PlanningFailed(
            raw.error
                .or(raw.message)
                .unwrap_or_else(|| "no route available".to_string()),
        ))
    }
}

#[async_trait]
impl RouteClient for BackendRouteClient {
    #[instrument(skip(self), fields(from = %start, to = %end))]
    async fn plan_route(
        &self,
        start: &GeoLocation,
        end: &GeoLocation,
        consider_weather: bool,
    ) -> Result<RouteResponse, RoutingError> {
        let url = self.config.endpoint("route");
        let body = RouteRequestBody {
            start: WireLocation::from(start),
            end: WireLocation::from(end),
            consider_weather,
        };

        debug!(?url, consider_weather, "Requesting route");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            if status.is_client_error() {
                let body = response.text().await.unwrap_or_default();
                if let Some(reason) = rejection_reason(&body) {
                    debug!(%status, %reason, "Route endpoint rejected the request");
                    return Err(RoutingError::PlanningFailed(reason));
                }
            }
            return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let result = Self::parse_route_response(&text)?;
        match &result {
            RouteResponse::Route(plan) => {
                debug!(points = plan.path.len(), steps = plan.steps.len(), "Route received");
            },
            RouteResponse::Advisory { warning, .. } => {
                warn!(%warning, "Route service returned an advisory instead of a route");
            },
        }
        Ok(result)
    }
}
