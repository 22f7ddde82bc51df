//! End-to-end tests: coordinator + backend adapters + recording map
//!
//! The backend is a wiremock server; the map is the recording adapter.

use std::sync::Arc;

use application::ports::{DisplayPort, Notification, NotificationLevel};
use application::services::{RouteDisplayConfig, RouteDisplayService, RouteError};
use domain::entities::{RouteSummary, TrafficSnapshot, WeatherSnapshot};
use domain::value_objects::RouteEndpoint;
use infrastructure::{
    BackendConfig, GeocoderAdapter, MapCall, RecordingMapAdapter, RoutePlannerAdapter,
    TrafficAdapter, WeatherAdapter,
};
use parking_lot::Mutex;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct CollectingDisplay {
    notifications: Mutex<Vec<Notification>>,
    routes: Mutex<Vec<RouteSummary>>,
    weather: Mutex<Vec<WeatherSnapshot>>,
    traffic: Mutex<Vec<TrafficSnapshot>>,
}

impl DisplayPort for CollectingDisplay {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }

    fn set_loading(&self, _loading: bool) {}

    fn show_route(&self, summary: &RouteSummary) {
        self.routes.lock().push(summary.clone());
    }

    fn clear_route(&self) {}

    fn show_weather(&self, weather: &WeatherSnapshot) {
        self.weather.lock().push(weather.clone());
    }

    fn show_traffic(&self, traffic: &TrafficSnapshot) {
        self.traffic.lock().push(traffic.clone());
    }
}

struct Fixture {
    server: MockServer,
    service: RouteDisplayService,
    map: Arc<RecordingMapAdapter>,
    display: Arc<CollectingDisplay>,
}

async fn fixture() -> Fixture {
    let server = MockServer::start().await;
    let backend = BackendConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };

    let map = Arc::new(RecordingMapAdapter::new());
    let display = Arc::new(CollectingDisplay::default());
    let service = RouteDisplayService::new(
        Arc::new(GeocoderAdapter::from_config(&backend.routing()).unwrap()),
        Arc::new(RoutePlannerAdapter::from_config(&backend.routing()).unwrap()),
        map.clone(),
        display.clone(),
        RouteDisplayConfig::default(),
    )
    .with_weather(Arc::new(
        WeatherAdapter::from_config(&backend.conditions()).unwrap(),
    ))
    .with_traffic(Arc::new(
        TrafficAdapter::from_config(&backend.conditions()).unwrap(),
    ));

    Fixture {
        server,
        service,
        map,
        display,
    }
}

async fn mount_geocode(server: &MockServer, address: &str, lat: f64, lng: f64) {
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("address", address))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "location": {"lat": lat, "lng": lng}
        })))
        .mount(server)
        .await;
}

fn weather_json() -> serde_json::Value {
    json!({
        "temperature": 18.4,
        "apparent_temperature": 18.4,
        "weather_description": "Sunny",
        "humidity": 49,
        "wind_speed": 3.3,
        "wind_direction": "N"
    })
}

#[tokio::test]
async fn plan_draws_route_on_map() {
    let f = fixture().await;
    mount_geocode(&f.server, "Tiananmen", 39.9055, 116.3976).await;
    mount_geocode(&f.server, "Summer Palace", 39.9999, 116.2755).await;

    Mock::given(method("POST"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "route": {
                "distance": 950,
                "duration": 3720,
                "coordinates": [[39.9055, 116.3976], [39.95, 116.33], [39.9999, 116.2755]],
                "steps": [
                    {
                        "instruction": "Walk to the station",
                        "distance": 200,
                        "duration": 180,
                        "mode": "walking"
                    },
                    {
                        "instruction": "Take line 4",
                        "distance": 750,
                        "duration": 3540,
                        "mode": "subway"
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&f.server)
        .await;

    let summary = f
        .service
        .plan_and_display("Tiananmen", "Summer Palace")
        .await
        .unwrap();

    assert_eq!(summary.distance_text, "950 m");
    assert_eq!(summary.duration_text, "1 h 2 min");
    assert_eq!(summary.steps.len(), 2);

    let calls = f.map.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0], MapCall::ClearOverlays);
    assert!(matches!(&calls[1], MapCall::AddMarker { label, .. } if label == "Tiananmen"));
    assert!(matches!(&calls[2], MapCall::AddMarker { label, .. } if label == "Summer Palace"));
    assert!(matches!(&calls[3], MapCall::DrawPath { points, .. } if points.len() == 3));
    assert!(matches!(&calls[4], MapCall::FitToBounds { points } if points.len() == 3));

    assert_eq!(f.map.live_markers().len(), 2);
    assert_eq!(f.map.live_paths().len(), 1);
    assert_eq!(f.display.routes.lock().len(), 1);
    assert!(f.display.notifications.lock().is_empty());
}

#[tokio::test]
async fn advisory_shows_warning_and_weather() {
    let f = fixture().await;
    mount_geocode(&f.server, "A", 39.90, 116.40).await;
    mount_geocode(&f.server, "B", 39.95, 116.45).await;

    Mock::given(method("POST"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "warning": "Heavy rain, outdoor travel not recommended",
            "weather": weather_json()
        })))
        .mount(&f.server)
        .await;

    let summary = f.service.plan_and_display("A", "B").await.unwrap();

    assert!(summary.degraded);
    assert_eq!(f.map.clear_count(), 1);
    assert_eq!(f.map.live_markers().len(), 2);
    assert_eq!(f.map.draw_count(), 0);

    let notifications = f.display.notifications.lock().clone();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Warning);
    assert_eq!(f.display.weather.lock()[0].description, "Sunny");
}

#[tokio::test]
async fn unknown_start_address_skips_route_request() {
    let f = fixture().await;
    mount_geocode(&f.server, "B", 39.95, 116.45).await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("address", "Atlantis"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "0", "error": "address not found"})),
        )
        .mount(&f.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&f.server)
        .await;

    let err = f.service.plan_and_display("Atlantis", "B").await.unwrap_err();

    assert_eq!(
        err,
        RouteError::GeocodeNotFound {
            side: RouteEndpoint::Start,
            address: "Atlantis".to_string()
        }
    );
    assert!(f.map.calls().is_empty());
    assert_eq!(f.display.notifications.lock().len(), 1);
}

#[tokio::test]
async fn backend_outage_is_a_transport_error() {
    let f = fixture().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&f.server)
        .await;

    let err = f.service.plan_and_display("A", "B").await.unwrap_err();

    assert!(matches!(
        err,
        RouteError::GeocodeTransportError {
            side: RouteEndpoint::Start,
            ..
        }
    ));
}

#[tokio::test]
async fn conditions_refresh_survives_traffic_failure() {
    let f = fixture().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "weather": weather_json()
        })))
        .expect(1)
        .mount(&f.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/traffic"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&f.server)
        .await;

    let report = f.service.refresh_conditions(None).await;

    assert!(report.weather.is_some());
    assert!(report.traffic.is_none());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(f.display.weather.lock().len(), 1);

    let notifications = f.display.notifications.lock().clone();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Error);
}
