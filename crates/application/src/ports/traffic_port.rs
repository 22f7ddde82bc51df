//! Traffic service port

use async_trait::async_trait;
use domain::entities::TrafficSnapshot;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the city-wide traffic snapshot
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrafficPort: Send + Sync {
    async fn traffic_snapshot(&self) -> Result<TrafficSnapshot, ApplicationError>;
}
