//! Terminal rendering of the UI surface

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use application::ports::{DisplayPort, Notification, NotificationLevel};
use domain::entities::{RouteSummary, TrafficSnapshot, WeatherSnapshot};
use parking_lot::Mutex;

/// Writes notifications and panels as plain lines
pub struct TerminalDisplay {
    out: Mutex<Box<dyn Write + Send>>,
    loading: AtomicBool,
}

impl std::fmt::Debug for TerminalDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalDisplay")
            .field("loading", &self.loading.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl TerminalDisplay {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            loading: AtomicBool::new(false),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = self.out.lock();
        for line in lines {
            // A closed terminal is not worth failing a route request over
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

const fn level_icon(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "ℹ️",
        NotificationLevel::Success => "✅",
        NotificationLevel::Warning => "⚠️",
        NotificationLevel::Error => "❌",
    }
}

impl DisplayPort for TerminalDisplay {
    fn notify(&self, notification: Notification) {
        self.write_lines(&[format!(
            "{} {}",
            level_icon(notification.level),
            notification.message
        )]);
    }

    fn set_loading(&self, loading: bool) {
        let was = self.loading.swap(loading, Ordering::SeqCst);
        if loading && !was {
            self.write_lines(&["⏳ Planning route...".to_string()]);
        }
    }

    fn show_route(&self, summary: &RouteSummary) {
        let mut lines = vec![summary.format_summary()];
        lines.extend(summary.steps.iter().map(|step| format!("  {}", step.format_detail())));
        self.write_lines(&lines);
    }

    fn clear_route(&self) {
        self.write_lines(&["🗺️ Route cleared".to_string()]);
    }

    fn show_weather(&self, weather: &WeatherSnapshot) {
        self.write_lines(&[weather.format_line()]);
    }

    fn show_traffic(&self, traffic: &TrafficSnapshot) {
        self.write_lines(&[traffic.format_line()]);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::entities::{RoutePlan, RouteStep, TravelMode};
    use domain::value_objects::GeoLocation;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn display() -> (TerminalDisplay, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (TerminalDisplay::new(Box::new(buffer.clone())), buffer)
    }

    #[test]
    fn notification_has_level_icon() {
        let (display, buffer) = display();
        display.notify(Notification::error("Could not find the start address"));
        assert_eq!(buffer.text(), "❌ Could not find the start address\n");
    }

    #[test]
    fn loading_is_printed_once() {
        let (display, buffer) = display();
        display.set_loading(true);
        display.set_loading(true);
        display.set_loading(false);
        assert_eq!(buffer.text().matches("Planning route").count(), 1);
    }

    #[test]
    fn route_lists_steps() {
        let (display, buffer) = display();
        let plan = RoutePlan {
            path: vec![GeoLocation::beijing(), GeoLocation::beijing()],
            distance_meters: 950.0,
            duration_seconds: 600.0,
            steps: vec![RouteStep {
                instruction: "Walk east".to_string(),
                mode: TravelMode::Walk,
                distance_meters: 950.0,
                duration_seconds: 600.0,
            }],
        };

        display.show_route(&RouteSummary::from_plan(&plan));

        let text = buffer.text();
        assert!(text.contains("950 m"));
        assert!(text.contains("10 min"));
        assert!(text.contains("Walk east"));
        assert_eq!(text.lines().count(), 2);
    }
}
