//! Which end of a route a value belongs to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Start or end of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteEndpoint {
    /// Origin of the route
    Start,
    /// Destination of the route
    End,
}

impl RouteEndpoint {
    /// Human-readable label used in notifications and marker popups
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "destination",
        }
    }
}

impl fmt::Display for RouteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labels() {
        assert_eq!(RouteEndpoint::Start.to_string(), "start");
        assert_eq!(RouteEndpoint::End.to_string(), "destination");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RouteEndpoint::Start).unwrap(),
            "\"start\""
        );
    }
}
