//! Test capture mode for deterministic logging assertions
//!
//! This module provides a subscriber layer that captures `tracing` events
//! in memory so tests can assert on what `TracingSink` emitted.

use bridgelog_core_types::schema::{
    FIELD_COMPONENT, FIELD_MESSAGE, FIELD_REQUEST_ID, FIELD_TRACE_ID,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub component: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
    pub trace_id: Option<String>,
    pub fields: HashMap<String, String>,
}

struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Test capture layer for collecting log events
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        let capture = TestCapture { events };
        (layer, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            component: visitor.fields.get(FIELD_COMPONENT).cloned(),
            message: visitor.fields.get(FIELD_MESSAGE).cloned(),
            request_id: visitor.fields.get(FIELD_REQUEST_ID).cloned(),
            trace_id: visitor.fields.get(FIELD_TRACE_ID).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events whose message equals `message`
    pub fn events_with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message.as_deref() == Some(message))
            .collect()
    }

    /// Assert that an event with the given message was recorded at `level`
    ///
    /// # Panics
    ///
    /// Panics if no such event is found
    pub fn assert_event_at(&self, message: &str, level: Level) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.message.as_deref() == Some(message) && e.level == level);
        assert!(
            found,
            "Expected event message={:?} level={} not found in {} captured events",
            message,
            level,
            events.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first use and
/// returns the shared capture handle. Tests running in parallel share it,
/// so each test should log messages unique to itself.
///
/// # Panics
///
/// Panics if another global subscriber was already installed.
///
/// # Example
///
/// ```
/// use bridgelog_logging::test_capture::init_test_capture;
/// use bridgelog_logging::{log_args, ContextLogger, LevelMappingAdapter};
/// use bridgelog_errors::DiagnosticError;
///
/// let capture = init_test_capture();
/// let logger = LevelMappingAdapter::with_tracing(DiagnosticError::new);
/// logger.warn(&log_args!["doc example warning"]);
/// capture.assert_event_at("doc example warning", tracing::Level::WARN);
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_event_clone() {
        let event = CapturedEvent {
            level: Level::INFO,
            target: "bridgelog".to_string(),
            component: Some("bridgelog".to_string()),
            message: Some("hello".to_string()),
            request_id: None,
            trace_id: None,
            fields: HashMap::new(),
        };

        let cloned = event.clone();
        assert_eq!(cloned.level, event.level);
        assert_eq!(cloned.message, event.message);
    }

    #[test]
    fn test_scoped_capture_records_levels() {
        let (layer, capture) = TestCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(component = "bridgelog", "scoped warning");
        });

        capture.assert_event_at("scoped warning", Level::WARN);
        let events = capture.events_with_message("scoped warning");
        assert_eq!(events[0].component.as_deref(), Some("bridgelog"));
    }
}
