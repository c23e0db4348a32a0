//! Structured, invocation-scoped logging.
//!
//! Every record is a single JSON object with `component`, `level`, `event`,
//! `request_id`, `timestamp` and `details`. Stderr is the Lambda log stream;
//! the capturing sink exists so handlers can be asserted on in tests.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

#[derive(Debug, Clone)]
enum LogSink {
    Stderr,
    Capture(Arc<Mutex<Vec<Value>>>),
}

#[derive(Debug, Clone)]
pub struct InvocationLog {
    component: &'static str,
    request_id: Option<String>,
    sink: LogSink,
}

impl InvocationLog {
    pub fn stderr(component: &'static str) -> Self {
        Self {
            component,
            request_id: None,
            sink: LogSink::Stderr,
        }
    }

    pub fn capturing(component: &'static str) -> Self {
        Self {
            component,
            request_id: None,
            sink: LogSink::Capture(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Same request and sink, different component name.
    pub fn scoped(&self, component: &'static str) -> Self {
        Self {
            component,
            request_id: self.request_id.clone(),
            sink: self.sink.clone(),
        }
    }

    pub fn info(&self, event: &str, details: Value) {
        self.emit("info", event, details);
    }

    pub fn error(&self, event: &str, details: Value) {
        self.emit("error", event, details);
    }

    /// Records written so far. Always empty for the stderr sink.
    pub fn captured(&self) -> Vec<Value> {
        match &self.sink {
            LogSink::Stderr => Vec::new(),
            LogSink::Capture(records) => records
                .lock()
                .map(|records| records.clone())
                .unwrap_or_default(),
        }
    }

    pub fn captured_events(&self) -> Vec<String> {
        self.captured()
            .iter()
            .filter_map(|record| record["event"].as_str().map(str::to_string))
            .collect()
    }

    fn emit(&self, level: &str, event: &str, details: Value) {
        let record = json!({
            "component": self.component,
            "level": level,
            "event": event,
            "request_id": self.request_id,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        });

        match &self.sink {
            LogSink::Stderr => eprintln!("{record}"),
            LogSink::Capture(records) => {
                if let Ok(mut records) = records.lock() {
                    records.push(record);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_carry_component_level_and_request_id() {
        let log = InvocationLog::capturing("sync_handler").with_request_id("req-1");
        log.info("event_received", json!({"records": 1}));
        log.error("sync_failed", json!({"error": "boom"}));

        let records = log.captured();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["component"], "sync_handler");
        assert_eq!(records[0]["level"], "info");
        assert_eq!(records[0]["request_id"], "req-1");
        assert_eq!(records[0]["details"]["records"], 1);
        assert_eq!(records[1]["level"], "error");
        assert!(records[1]["timestamp"].as_str().is_some());
    }

    #[test]
    fn scoped_logs_share_the_capture_sink() {
        let log = InvocationLog::capturing("sync_handler").with_request_id("req-2");
        let scoped = log.scoped("trigger");
        scoped.info("trigger_skipped", json!({}));

        let records = log.captured();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["component"], "trigger");
        assert_eq!(records[0]["request_id"], "req-2");
    }

    #[test]
    fn stderr_sink_captures_nothing() {
        let log = InvocationLog::stderr("sync_handler");
        log.info("event_received", json!({}));
        assert!(log.captured().is_empty());
    }
}
