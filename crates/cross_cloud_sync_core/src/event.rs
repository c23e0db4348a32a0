//! Summaries of the invocation event for logging.
//!
//! The event never drives the copy; it is only described in the handler's
//! structured log, so every field is optional and unknown shapes are kept.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EventRecordSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EventSummary {
    pub records: Vec<EventRecordSummary>,
    /// Top-level keys of events that are not record batches.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_level_keys: Vec<String>,
}

pub fn summarize_event(event: &Value) -> EventSummary {
    let Some(records) = event.get("Records").and_then(Value::as_array) else {
        return EventSummary {
            records: Vec::new(),
            top_level_keys: event
                .as_object()
                .map(|object| object.keys().cloned().collect())
                .unwrap_or_default(),
        };
    };

    EventSummary {
        records: records.iter().map(summarize_record).collect(),
        top_level_keys: Vec::new(),
    }
}

fn summarize_record(record: &Value) -> EventRecordSummary {
    let string_at = |pointer: &str| {
        record
            .pointer(pointer)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    EventRecordSummary {
        event_source: string_at("/eventSource"),
        event_name: string_at("/eventName"),
        bucket: string_at("/s3/bucket/name"),
        key: string_at("/s3/object/key"),
    }
}
