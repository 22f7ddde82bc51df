//! Wire models for the routing endpoints
//!
//! The backend reports success through a `status` field that has been sent as
//! `"1"`, `"success"` and `1` over time, so it is kept as a raw JSON value.

use domain::{GeoLocation, RoutePlan, RouteStep, TravelMode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a backend `status` field signals success
#[must_use]
pub fn is_success_status(status: &Value) -> bool {
    match status {
        Value::String(s) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "success" | "ok")
        },
        Value::Number(n) => n.as_i64() == Some(1),
        Value::Bool(b) => *b,
        _ => false,
    }
}

/// Error body of a 4xx answer
///
/// Either the usual `{status, error|message}` envelope or FastAPI's
/// `{"detail": ...}`, where `detail` is a string or a list of validation errors.
#[derive(Debug, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    status: Value,
    error: Option<String>,
    message: Option<String>,
    #[serde(default)]
    detail: Value,
}

/// Reason carried by a client-error body, if the body is an explicit rejection
///
/// Returns `None` for bodies that are not JSON or say nothing, e.g. the 404
/// page of a wrong base URL.
pub(crate) fn rejection_reason(body: &str) -> Option<String> {
    let body: RejectionBody = serde_json::from_str(body).ok()?;
    let detail = match body.detail {
        Value::String(text) => Some(text),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    };

    let reason = body.error.or(body.message).or(detail).filter(|r| !r.trim().is_empty());
    match reason {
        Some(reason) => Some(reason),
        None if !body.status.is_null() && !is_success_status(&body.status) => {
            Some("rejected by backend".to_string())
        },
        None => None,
    }
}

/// A coordinate pair as sent and received by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct WireLocation {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl From<&GeoLocation> for WireLocation {
    fn from(location: &GeoLocation) -> Self {
        Self {
            latitude: location.latitude(),
            longitude: location.longitude(),
        }
    }
}

/// `GET /geocode` response
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub status: Value,
    pub location: Option<WireLocation>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// `POST /route` request body
#[derive(Debug, Serialize)]
pub(crate) struct RouteRequestBody {
    pub start: WireLocation,
    pub end: WireLocation,
    pub consider_weather: bool,
}

/// `POST /route` response
#[derive(Debug, Deserialize)]
pub(crate) struct RouteResponseBody {
    #[serde(default)]
    pub status: Value,
    pub route: Option<WireRoute>,
    pub warning: Option<String>,
    pub weather: Option<Value>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// GeoJSON-style geometry (`[lng, lat]` pairs)
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireGeometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

/// Route payload
///
/// `coordinates` is `[lat, lng]`; older backends only send `geometry` in
/// GeoJSON order, which is used as a fallback.
#[derive(Debug, Deserialize)]
pub(crate) struct WireRoute {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
    #[serde(default)]
    pub geometry: Option<WireGeometry>,
    #[serde(default)]
    pub steps: Vec<WireStep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireStep {
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub mode: String,
}

impl WireRoute {
    /// Convert into a domain plan, validating every coordinate
    pub fn into_plan(self) -> Result<RoutePlan, String> {
        let path = if self.coordinates.is_empty() {
            self.geometry
                .unwrap_or_default()
                .coordinates
                .into_iter()
                .map(|[lng, lat]| GeoLocation::new(lat, lng))
                .collect::<Result<Vec<_>, _>>()
        } else {
            self.coordinates
                .into_iter()
                .map(|[lat, lng]| GeoLocation::new(lat, lng))
                .collect::<Result<Vec<_>, _>>()
        }
        .map_err(|e| e.to_string())?;

        let steps = self
            .steps
            .into_iter()
            .map(|s| RouteStep {
                instruction: s.instruction,
                mode: TravelMode::from_wire(&s.mode),
                distance_meters: s.distance,
                duration_seconds: s.duration,
            })
            .collect();

        Ok(RoutePlan {
            path,
            distance_meters: self.distance,
            duration_seconds: self.duration,
            steps,
        })
    }
}
