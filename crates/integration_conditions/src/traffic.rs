//! City-wide traffic client

use async_trait::async_trait;
use domain::TrafficSnapshot;
use integration_routing::is_success_status;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::ConditionsConfig;
use crate::error::ConditionsError;
use crate::http::{build_client, get_json};
use crate::models::TrafficResponse;

/// Trait for traffic clients
#[async_trait]
pub trait TrafficClient: Send + Sync {
    /// Fetch the current congestion snapshot
    async fn snapshot(&self) -> Result<TrafficSnapshot, ConditionsError>;
}

/// Traffic client for the route display backend
#[derive(Debug)]
pub struct BackendTrafficClient {
    client: Client,
    config: ConditionsConfig,
}

impl BackendTrafficClient {
    /// Create a new traffic client
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
}

#[async_trait]
impl TrafficClient for BackendTrafficClient {
    #[instrument(skip(self))]
    async fn snapshot(&self) -> Result<TrafficSnapshot, ConditionsError> {
        let response: TrafficResponse = get_json(&self.client, &self.config, "traffic", &[]).await?;

        if !is_success_status(&response.status) {
            return Err(ConditionsError::Unavailable(
                response
                    .error
                    .unwrap_or_else(|| "traffic unavailable".to_string()),
            ));
        }

        let traffic = response
            .traffic
            .ok_or_else(|| ConditionsError::ParseError("response carried no traffic".to_string()))?;
        debug!(congestion_index = traffic.congestion_index, "Traffic received");
        Ok(traffic)
    }
}
