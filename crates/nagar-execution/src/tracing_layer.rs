//! Tracing layer that forwards warnings and errors to a front end.
//!
//! Library code never prints. Background failures (a conversation record
//! that could not be stored, an upload that timed out) are logged with
//! `tracing`, and this layer hands them to whoever renders the chat so they
//! can be shown without scraping stderr.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// A forwarded log event.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DiagnosticEvent {
    /// Event target (e.g., "nagar_infrastructure::rest_conversation_log")
    pub target: String,
    /// Log level (WARN, ERROR)
    pub level: String,
    /// Human-readable message
    pub message: String,
    /// Structured fields from the event, without `message`
    pub fields: HashMap<String, Value>,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Sends every event at or above `min_level` to a channel.
pub struct DiagnosticLayer {
    sender: mpsc::UnboundedSender<DiagnosticEvent>,
    min_level: Level,
}

impl DiagnosticLayer {
    /// Forwards WARN and ERROR events.
    pub fn new(sender: mpsc::UnboundedSender<DiagnosticEvent>) -> Self {
        Self::with_min_level(sender, Level::WARN)
    }

    pub fn with_min_level(sender: mpsc::UnboundedSender<DiagnosticEvent>, min_level: Level) -> Self {
        Self { sender, min_level }
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Levels compare by verbosity: ERROR < WARN < ... < TRACE.
        if *event.metadata().level() > self.min_level {
            return;
        }

        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));

        let message = match fields.remove("message") {
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let diagnostic = DiagnosticEvent {
            target: event.metadata().target().to_string(),
            level: event.metadata().level().to_string(),
            message,
            fields,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        // Receiver gone means nobody is listening any more.
        let _ = self.sender.send(diagnostic);
    }
}

/// Field visitor that extracts tracing event fields into a HashMap
struct FieldVisitor<'a>(&'a mut HashMap<String, Value>);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_forwards_warnings_and_errors_only() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscriber = tracing_subscriber::registry().with(DiagnosticLayer::new(tx));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("ignored");
            tracing::warn!(session_id = "s-1", attempt = 2u64, "Log append failed");
            tracing::error!("Upload failed");
        });

        let first = rx.try_recv().unwrap();
        assert_eq!(first.level, "WARN");
        assert_eq!(first.message, "Log append failed");
        assert_eq!(first.fields["session_id"], serde_json::json!("s-1"));
        assert_eq!(first.fields["attempt"], serde_json::json!(2));
        assert!(!first.fields.contains_key("message"));

        assert_eq!(rx.try_recv().unwrap().level, "ERROR");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let subscriber = tracing_subscriber::registry().with(DiagnosticLayer::new(tx));
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("nobody listens");
        });
    }
}
