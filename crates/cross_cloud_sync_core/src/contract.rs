use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONFIG_OBJECT_KEY: &str = "config/app-config.json";
pub const TRIGGER_SOURCE: &str = "aws-lambda";
pub const SUCCESS_MESSAGE: &str = "Cross-cloud sync completed successfully";
pub const FAILURE_MESSAGE: &str = "Cross-cloud sync failed";

pub const STATUS_OK: u16 = 200;
pub const STATUS_SYNC_FAILED: u16 = 502;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Outcome of copying the configuration object between providers.
///
/// Serialized with a `status` tag of `"success"` or `"error"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncResult {
    Success {
        file: String,
        size: usize,
        source: String,
        destination: String,
    },
    Error {
        error: String,
    },
}

impl SyncResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriggerPayload {
    pub source: String,
    pub sync_result: SyncResult,
}

impl TriggerPayload {
    pub fn from_sync_result(sync_result: SyncResult) -> Self {
        Self {
            source: TRIGGER_SOURCE.to_string(),
            sync_result,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriggerResult {
    pub status: String,
    pub message: String,
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentSummary {
    pub gcp_project: String,
    pub gcp_region: String,
    pub s3_bucket: String,
    pub gcs_bucket: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncSuccessBody {
    pub message: String,
    pub sync_result: SyncResult,
    pub trigger_result: TriggerResult,
    pub environment: EnvironmentSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncErrorBody {
    pub error: String,
    pub message: String,
}

impl SyncErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// The uniform `{statusCode, body}` response returned for every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
