//! Shared request plumbing for the condition clients

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::ConditionsConfig;
use crate::error::ConditionsError;

pub(crate) fn build_client(config: &ConditionsConfig) -> Result<Client, ConditionsError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| ConditionsError::ConnectionFailed(e.to_string()))
}

/// Send a GET request and decode the JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    config: &ConditionsConfig,
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ConditionsError> {
    let url = config.endpoint(path);

    let response = client
        .get(&url)
        .query(query)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ConditionsError::Timeout {
                    timeout_secs: config.timeout_secs,
                }
            } else {
                ConditionsError::ConnectionFailed(e.to_string())
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, %status, "Conditions endpoint returned an error status");
        return Err(ConditionsError::RequestFailed(format!("HTTP {status}")));
    }

    response
        .json()
        .await
        .map_err(|e| ConditionsError::ParseError(e.to_string()))
}
