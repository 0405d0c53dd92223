//! In-memory log capture
//!
//! Installs a thread-local subscriber that records the level and message of
//! every event. `#[tokio::test]` runs on a current-thread runtime, so the
//! handlers driven through `TestServer` log into the same subscriber.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
}

/// Events recorded while the guard returned by [`capture_logs`] is alive
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<LogEntry>>>);

impl CapturedLogs {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.0.lock().unwrap().clone()
    }

    /// Messages logged at `level`
    pub fn at(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message)
            .collect()
    }

    pub fn all_text(&self) -> String {
        self.entries()
            .into_iter()
            .map(|entry| entry.message)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct CaptureLayer(CapturedLogs);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0 .0.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

/// Record every event on the current thread until the guard is dropped
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(logs.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
