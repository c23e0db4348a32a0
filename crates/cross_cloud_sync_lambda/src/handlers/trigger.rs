use cross_cloud_sync_core::contract::TriggerResult;
use serde_json::{json, Value};

use crate::adapters::invocation_log::InvocationLog;

/// Records the intent to invoke a Cloud Function in `project_id:region`.
///
/// No request leaves the process; the payload is echoed back unchanged.
pub fn trigger_remote_function(
    project_id: &str,
    region: &str,
    payload: Value,
    log: &InvocationLog,
) -> TriggerResult {
    log.info(
        "trigger_skipped",
        json!({
            "project_id": project_id,
            "region": region,
            "payload": payload.clone(),
        }),
    );

    TriggerResult {
        status: "success".to_string(),
        message: format!("Triggered GCP function in {project_id}:{region}"),
        payload,
    }
}
