//! In-memory capture of tracing events
//!
//! Installs a registry with a single recording layer so tests can assert on
//! the structured fields of events emitted anywhere in the process.

use crate::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP, FIELD_SOURCE};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event
///
/// Every field is kept in its display form, keyed by field name. The
/// formatted message is stored under `message`.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    // Numbers, bools and `%`/`?` values all arrive here
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Sink = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    sink: Sink,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields,
        };
        if let Ok(mut events) = self.sink.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone)]
pub struct TestCapture {
    sink: Sink,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events carrying a `source` field equal to `source`
    ///
    /// Tests share one global capture, so naming inputs uniquely per test and
    /// filtering here keeps assertions independent.
    pub fn from_source(&self, source: &str) -> Vec<CapturedEvent> {
        self.matching(|e| e.field(FIELD_SOURCE) == Some(source))
    }

    pub fn matching<F>(&self, predicate: F) -> Vec<CapturedEvent>
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().into_iter().filter(|e| predicate(e)).collect()
    }

    /// # Panics
    ///
    /// Panics if no event has the given `op` and `event` fields
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let found = self
            .matching(|e| e.op() == Some(op) && e.event() == Some(event))
            .len();
        assert!(found > 0, "no captured event with op={} event={}", op, event);
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.sink.lock() {
            events.clear();
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber (once per process) and return its handle
///
/// If another global subscriber was installed first, the handle stays empty.
///
/// ```
/// use manidiff_core::logging_facility::test_capture::init_test_capture;
/// use manidiff_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let sink = Sink::default();
            let layer = CaptureLayer { sink: sink.clone() };
            let _ = tracing_subscriber::registry().with(layer).try_init();
            TestCapture { sink }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors_read_schema_keys() {
        let mut fields = HashMap::new();
        fields.insert(FIELD_OP.to_string(), "decode".to_string());
        fields.insert(FIELD_SOURCE.to_string(), "a.yaml".to_string());
        let event = CapturedEvent {
            level: Level::WARN,
            target: "manidiff_store".to_string(),
            fields,
        };

        assert_eq!(event.op(), Some("decode"));
        assert_eq!(event.field(FIELD_SOURCE), Some("a.yaml"));
        assert_eq!(event.event(), None);
        assert_eq!(event.message(), None);
    }
}
