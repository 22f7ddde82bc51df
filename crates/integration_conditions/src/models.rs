//! Wire models for the condition endpoints

use domain::{TrafficSnapshot, WeatherSnapshot};
use serde::Deserialize;
use serde_json::Value;

/// Weather object as sent by `GET /weather` and embedded in route advisories
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default, alias = "description")]
    pub weather_description: String,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: String,
    #[serde(default, alias = "suitable_for_outdoor")]
    pub is_suitable_for_outdoor: Option<bool>,
}

impl WeatherPayload {
    /// Decode from a loosely typed JSON value, e.g. an advisory's `weather` field
    ///
    /// # Errors
    ///
    /// Returns the decoding error message when the value is not a weather object.
    pub fn from_value(value: Value) -> Result<Self, String> {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}

impl From<WeatherPayload> for WeatherSnapshot {
    fn from(payload: WeatherPayload) -> Self {
        Self {
            temperature: payload.temperature,
            apparent_temperature: payload.apparent_temperature.unwrap_or(payload.temperature),
            description: payload.weather_description,
            humidity: payload.humidity,
            wind_speed: payload.wind_speed,
            wind_direction: payload.wind_direction,
            suitable_for_outdoor: payload.is_suitable_for_outdoor,
        }
    }
}

/// `GET /weather` response
#[derive(Debug, Deserialize)]
pub(crate) struct WeatherResponse {
    #[serde(default)]
    pub status: Value,
    pub weather: Option<WeatherPayload>,
    pub error: Option<String>,
}

/// `GET /traffic` response
#[derive(Debug, Deserialize)]
pub(crate) struct TrafficResponse {
    #[serde(default)]
    pub status: Value,
    pub traffic: Option<TrafficSnapshot>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use integration_routing::is_success_status;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_weather_payload_to_snapshot() {
        let payload = WeatherPayload::from_value(json!({
            "temperature": 18.4,
            "apparent_temperature": 17.9,
            "weather_description": "Sunny",
            "humidity": 49,
            "wind_speed": 3.3,
            "wind_direction": "N"
        }))
        .unwrap();

        let snapshot = WeatherSnapshot::from(payload);
        assert_eq!(snapshot.description, "Sunny");
        assert!((snapshot.apparent_temperature - 17.9).abs() < f64::EPSILON);
        assert!((snapshot.humidity - 49.0).abs() < f64::EPSILON);
        assert_eq!(snapshot.suitable_for_outdoor, None);
    }

    #[test]
    fn test_weather_payload_partial() {
        let payload = WeatherPayload::from_value(json!({
            "temperature": 38.0,
            "description": "Heatwave",
            "is_suitable_for_outdoor": false
        }))
        .unwrap();

        let snapshot = WeatherSnapshot::from(payload);
        assert!((snapshot.apparent_temperature - 38.0).abs() < f64::EPSILON);
        assert_eq!(snapshot.description, "Heatwave");
        assert_eq!(snapshot.suitable_for_outdoor, Some(false));
    }

    #[test]
    fn test_weather_payload_rejects_non_object() {
        assert!(WeatherPayload::from_value(json!("sunny")).is_err());
    }

    #[test]
    fn test_traffic_response_decodes_into_snapshot() {
        let response: TrafficResponse = serde_json::from_value(json!({
            "status": "1",
            "traffic": {
                "congestion_index": 1.199,
                "status": "smooth",
                "weekly_change": -3.0,
                "rank": {"current": 23, "total": 101},
                "average_speed": 40.22,
                "congested_length": 6.17,
                "monthly_highest": {"index": 3.243, "date": "2025-05-22", "day": "Thu"}
            }
        }))
        .unwrap();

        assert!(is_success_status(&response.status));
        let traffic = response.traffic.unwrap();
        assert_eq!(traffic.rank.current, 23);
        assert_eq!(traffic.monthly_highest.day, "Thu");
    }
}
