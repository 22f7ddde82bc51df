//! UI surface port
//!
//! A passive sink for whatever the user sees besides the map: transient
//! notifications, the loading indicator, and the route and conditions panels.

use std::fmt;

use domain::entities::{RouteSummary, TrafficSnapshot, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

/// Port for the non-map part of the UI
#[cfg_attr(test, automock)]
pub trait DisplayPort: Send + Sync {
    /// Show a transient message
    fn notify(&self, notification: Notification);

    /// Toggle the loading indicator
    fn set_loading(&self, loading: bool);

    /// Render the route summary panel
    fn show_route(&self, summary: &RouteSummary);

    /// Hide the route summary panel
    fn clear_route(&self);

    fn show_weather(&self, weather: &WeatherSnapshot);

    fn show_traffic(&self, traffic: &TrafficSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn DisplayPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DisplayPort>();
    }

    #[test]
    fn notification_constructors() {
        let n = Notification::warning("storm ahead");
        assert_eq!(n.level, NotificationLevel::Warning);
        assert_eq!(n.message, "storm ahead");
        assert_eq!(Notification::error("x").level.to_string(), "error");
    }

    #[test]
    fn level_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationLevel::Success).unwrap();
        assert_eq!(json, "\"success\"");
    }
}
