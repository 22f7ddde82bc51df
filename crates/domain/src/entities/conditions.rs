//! Ambient conditions shown next to a route
//!
//! Both snapshots are read-only display payloads. They have no identity and
//! live for a single render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current weather at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub apparent_temperature: f64,
    /// Free-text condition, e.g. "Sunny"
    pub description: String,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction label, e.g. "N"
    pub wind_direction: String,
    /// Backend verdict on outdoor travel, when provided
    pub suitable_for_outdoor: Option<bool>,
}

impl WeatherSnapshot {
    /// Format as a compact single line
    #[must_use]
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "🌤️ {:.1}°C (feels {:.1}°C), {}, humidity {:.0}%, wind {:.1} m/s {}",
            self.temperature,
            self.apparent_temperature,
            self.description,
            self.humidity,
            self.wind_speed,
            self.wind_direction
        );
        if self.suitable_for_outdoor == Some(false) {
            line.push_str(" ⚠️ not suitable for outdoor travel");
        }
        line
    }
}

/// City ranking for the congestion index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficRank {
    pub current: u32,
    pub total: u32,
}

/// Highest congestion reading of the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionPeak {
    pub index: f64,
    pub date: NaiveDate,
    /// Weekday label as sent by the backend
    pub day: String,
}

/// City-wide traffic snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    pub congestion_index: f64,
    /// Status label, e.g. "smooth"
    pub status: String,
    /// Week-over-week change in percent
    pub weekly_change: f64,
    pub rank: TrafficRank,
    /// Average speed in km/h
    pub average_speed: f64,
    /// Congested road length in km
    pub congested_length: f64,
    pub monthly_highest: CongestionPeak,
}

impl TrafficSnapshot {
    /// Week-over-week change with explicit sign, e.g. `"+1.50%"` or `"-3.00%"`
    #[must_use]
    pub fn weekly_change_text(&self) -> String {
        if self.weekly_change > 0.0 {
            format!("+{:.2}%", self.weekly_change)
        } else {
            format!("{:.2}%", self.weekly_change)
        }
    }

    /// Whether congestion got worse compared to last week
    #[must_use]
    pub fn is_worsening(&self) -> bool {
        self.weekly_change > 0.0
    }

    /// Format as a compact single line
    #[must_use]
    pub fn format_line(&self) -> String {
        format!(
            concat!(
                "🚗 congestion {:.3} ({}), {} wk/wk, rank {}/{}, ",
                "avg {:.2} km/h, congested {:.2} km, month peak {:.3} on {} {}"
            ),
            self.congestion_index,
            self.status,
            self.weekly_change_text(),
            self.rank.current,
            self.rank.total,
            self.average_speed,
            self.congested_length,
            self.monthly_highest.index,
            self.monthly_highest.date,
            self.monthly_highest.day
        )
    }
}
