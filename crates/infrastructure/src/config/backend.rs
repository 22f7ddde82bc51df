//! Backend API configuration shared by the routing and conditions clients

use integration_conditions::ConditionsConfig;
use integration_routing::RoutingConfig;
use serde::{Deserialize, Serialize};

/// Route display backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API, e.g. `http://localhost:8000/api/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("route-display/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    /// Settings for the geocoding and route clients
    #[must_use]
    pub fn routing(&self) -> RoutingConfig {
        RoutingConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Settings for the weather and traffic clients
    #[must_use]
    pub fn conditions(&self) -> ConditionsConfig {
        ConditionsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or timeout is unusable.
    pub fn validate(&self) -> Result<(), String> {
        self.routing().validate()
    }
}
