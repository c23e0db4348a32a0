use cross_cloud_sync_core::config::load_config;
use cross_cloud_sync_core::contract::{
    ResponseEnvelope, SyncErrorBody, SyncSuccessBody, TriggerPayload, FAILURE_MESSAGE,
    STATUS_INTERNAL_ERROR, STATUS_OK, STATUS_SYNC_FAILED, SUCCESS_MESSAGE,
};
use cross_cloud_sync_core::event::summarize_event;
use serde_json::{json, Value};

use crate::adapters::invocation_log::InvocationLog;
use crate::adapters::object_store::StoreConnector;
use crate::handlers::sync::sync_configuration_file;
use crate::handlers::trigger::trigger_remote_function;

/// Handles one invocation end to end and always produces an envelope.
///
/// `lookup` resolves configuration variables by name. Configuration,
/// connection and serialization failures map to a 500 envelope; a failed copy
/// is reported inside a 200 envelope unless strict status is enabled.
pub fn handle_sync_event(
    event: &Value,
    lookup: &dyn Fn(&str) -> Option<String>,
    connector: &dyn StoreConnector,
    log: &InvocationLog,
) -> ResponseEnvelope {
    log.info(
        "event_received",
        json!({
            "summary": summarize_event(event),
            "event": event,
        }),
    );

    match run_sync(lookup, connector, log) {
        Ok(envelope) => {
            log.info(
                "sync_completed",
                json!({
                    "status_code": envelope.status_code,
                    "body": envelope.body.clone(),
                }),
            );
            envelope
        }
        Err(error) => {
            log.error("sync_failed", json!({ "error": error.clone() }));
            error_envelope(error)
        }
    }
}

fn run_sync(
    lookup: &dyn Fn(&str) -> Option<String>,
    connector: &dyn StoreConnector,
    log: &InvocationLog,
) -> Result<ResponseEnvelope, String> {
    let config = load_config(lookup).map_err(|error| error.message())?;
    let stores = connector.connect(&config)?;

    let sync_result = sync_configuration_file(
        stores.source.as_ref(),
        stores.destination.as_ref(),
        &config.s3_bucket,
        &config.gcs_bucket,
        &log.scoped("sync"),
    );

    let trigger_payload = TriggerPayload::from_sync_result(sync_result.clone());
    let trigger_payload = serde_json::to_value(trigger_payload)
        .map_err(|error| format!("failed to serialize trigger payload: {error}"))?;
    let trigger_result = trigger_remote_function(
        &config.gcp_project_id,
        &config.gcp_region,
        trigger_payload,
        &log.scoped("trigger"),
    );

    let (status_code, message) = if config.strict_status && !sync_result.is_success() {
        (STATUS_SYNC_FAILED, FAILURE_MESSAGE)
    } else {
        (STATUS_OK, SUCCESS_MESSAGE)
    };

    let body = SyncSuccessBody {
        message: message.to_string(),
        sync_result,
        trigger_result,
        environment: config.environment_summary(),
    };

    Ok(ResponseEnvelope {
        status_code,
        body: serde_json::to_string(&body)
            .map_err(|error| format!("failed to serialize response body: {error}"))?,
    })
}

fn error_envelope(error: String) -> ResponseEnvelope {
    let body = serde_json::to_string(&SyncErrorBody::new(error))
        .unwrap_or_else(|_| json!({ "message": FAILURE_MESSAGE }).to_string());
    ResponseEnvelope {
        status_code: STATUS_INTERNAL_ERROR,
        body,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use cross_cloud_sync_core::config::{
        SyncConfig, GCP_PROJECT_ID_VAR, GCP_REGION_VAR, GCS_BUCKET_VAR, S3_BUCKET_VAR,
        STRICT_STATUS_VAR,
    };
    use cross_cloud_sync_core::contract::{SyncResult, CONFIG_OBJECT_KEY};

    use crate::adapters::object_store::{
        ConnectedStores, InMemoryConnector, InMemoryStore, SourceStore,
    };

    use super::*;

    struct FailingConnector;

    impl StoreConnector for FailingConnector {
        fn connect(&self, _config: &SyncConfig) -> Result<ConnectedStores, String> {
            Err("failed to initialize cloud storage client for project test-project".to_string())
        }
    }

    struct DeniedSource;

    impl SourceStore for DeniedSource {
        fn read_object(&self, _key: &str) -> Result<Vec<u8>, String> {
            Err("AccessDenied".to_string())
        }
    }

    struct DeniedSourceConnector {
        destination: InMemoryStore,
    }

    impl StoreConnector for DeniedSourceConnector {
        fn connect(&self, _config: &SyncConfig) -> Result<ConnectedStores, String> {
            Ok(ConnectedStores {
                source: Box::new(DeniedSource),
                destination: Box::new(self.destination.clone()),
            })
        }
    }

    fn environment(extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut values: HashMap<String, String> = [
            (GCP_PROJECT_ID_VAR, "test-project"),
            (GCP_REGION_VAR, "us-central1"),
            (S3_BUCKET_VAR, "test-s3-bucket"),
            (GCS_BUCKET_VAR, "test-gcs-bucket"),
        ]
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
        for (name, value) in extra {
            values.insert(name.to_string(), value.to_string());
        }
        values
    }

    fn sample_event() -> Value {
        json!({
            "Records": [{
                "eventSource": "aws:s3",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": {"name": "test-bucket"},
                    "object": {"key": "test-file.txt"}
                }
            }]
        })
    }

    fn seeded_connector(body: &[u8]) -> InMemoryConnector {
        let connector = InMemoryConnector::default();
        connector.source.seed_object(CONFIG_OBJECT_KEY, body);
        connector
    }

    fn invoke(
        values: &HashMap<String, String>,
        connector: &dyn StoreConnector,
        log: &InvocationLog,
    ) -> (ResponseEnvelope, Value) {
        let lookup = |name: &str| values.get(name).cloned();
        let envelope = handle_sync_event(&sample_event(), &lookup, connector, log);
        let body = envelope.body_json().expect("body should be valid json");
        (envelope, body)
    }

    #[test]
    fn successful_sync_reports_source_size_and_locations() {
        let config_body = br#"{"log_level":"info","regions":["us-west-2","us-central1"]}"#;
        let connector = seeded_connector(config_body);
        let log = InvocationLog::capturing("sync_handler");

        let (envelope, body) = invoke(&environment(&[]), &connector, &log);

        assert_eq!(envelope.status_code, 200);
        assert_eq!(body["message"], SUCCESS_MESSAGE);
        assert_eq!(body["sync_result"]["status"], "success");
        assert_eq!(body["sync_result"]["size"], json!(config_body.len()));
        assert_eq!(
            body["sync_result"]["source"],
            "s3://test-s3-bucket/config/app-config.json"
        );
        assert_eq!(
            body["sync_result"]["destination"],
            "gs://test-gcs-bucket/config/app-config.json"
        );
        assert_eq!(
            body["environment"],
            json!({
                "gcp_project": "test-project",
                "gcp_region": "us-central1",
                "s3_bucket": "test-s3-bucket",
                "gcs_bucket": "test-gcs-bucket",
            })
        );
        assert_eq!(
            connector.destination.object(CONFIG_OBJECT_KEY),
            Some(config_body.to_vec())
        );
    }

    #[test]
    fn trigger_result_echoes_sync_outcome() {
        let connector = seeded_connector(b"{}");
        let (_, body) = invoke(
            &environment(&[]),
            &connector,
            &InvocationLog::capturing("sync_handler"),
        );

        let trigger = &body["trigger_result"];
        assert_eq!(trigger["status"], "success");
        assert_eq!(
            trigger["message"],
            "Triggered GCP function in test-project:us-central1"
        );
        assert_eq!(trigger["payload"]["source"], "aws-lambda");
        assert_eq!(trigger["payload"]["sync_result"], body["sync_result"]);
    }

    #[test]
    fn missing_variable_returns_internal_error_envelope() {
        let mut values = environment(&[]);
        values.remove(S3_BUCKET_VAR);
        let connector = seeded_connector(b"{}");
        let log = InvocationLog::capturing("sync_handler");

        let (envelope, body) = invoke(&values, &connector, &log);

        assert_eq!(envelope.status_code, 500);
        let parsed: SyncErrorBody =
            serde_json::from_value(body).expect("error body should match contract");
        let missing_config = "Missing required environment variables";
        assert!(parsed.error.contains(missing_config));
        assert!(parsed.error.contains(S3_BUCKET_VAR));
        assert_eq!(parsed.message, FAILURE_MESSAGE);
        assert!(connector.destination.keys().is_empty());
        assert_eq!(log.captured_events(), vec!["event_received", "sync_failed"]);
    }

    #[test]
    fn missing_source_object_is_reported_inside_ok_envelope() {
        let connector = InMemoryConnector::default();

        let (envelope, body) = invoke(
            &environment(&[]),
            &connector,
            &InvocationLog::capturing("sync_handler"),
        );

        assert_eq!(envelope.status_code, 200);
        assert_eq!(body["sync_result"]["status"], "error");
        assert!(body["sync_result"]["error"]
            .as_str()
            .expect("error should be a string")
            .contains("NoSuchKey"));
        assert!(connector.destination.keys().is_empty());
    }

    #[test]
    fn strict_status_surfaces_failed_copy() {
        let connector = DeniedSourceConnector {
            destination: InMemoryStore::new(),
        };

        let (envelope, body) = invoke(
            &environment(&[(STRICT_STATUS_VAR, "true")]),
            &connector,
            &InvocationLog::capturing("sync_handler"),
        );

        assert_eq!(envelope.status_code, 502);
        assert_eq!(body["message"], FAILURE_MESSAGE);
        let sync_result: SyncResult = serde_json::from_value(body["sync_result"].clone())
            .expect("sync result should match contract");
        assert_eq!(
            sync_result,
            SyncResult::Error {
                error: "AccessDenied".to_string()
            }
        );
    }

    #[test]
    fn strict_status_keeps_ok_for_successful_copy() {
        let connector = seeded_connector(b"{}");

        let (envelope, _) = invoke(
            &environment(&[(STRICT_STATUS_VAR, "true")]),
            &connector,
            &InvocationLog::capturing("sync_handler"),
        );

        assert_eq!(envelope.status_code, 200);
    }

    #[test]
    fn connector_failure_returns_internal_error_envelope() {
        let (envelope, body) = invoke(
            &environment(&[]),
            &FailingConnector,
            &InvocationLog::capturing("sync_handler"),
        );

        assert_eq!(envelope.status_code, 500);
        let expected = "failed to initialize cloud storage client for project test-project";
        let parsed: SyncErrorBody =
            serde_json::from_value(body).expect("error body should match contract");
        assert_eq!(parsed, SyncErrorBody::new(expected));
    }

    #[test]
    fn logs_each_stage_under_its_component() {
        let connector = seeded_connector(b"{}");
        let log = InvocationLog::capturing("sync_handler").with_request_id("req-42");

        invoke(&environment(&[]), &connector, &log);

        let records = log.captured();
        let stages: Vec<(String, String)> = records
            .iter()
            .map(|record| {
                (
                    record["component"].as_str().unwrap_or_default().to_string(),
                    record["event"].as_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        assert_eq!(
            stages,
            vec![
                ("sync_handler".to_string(), "event_received".to_string()),
                ("sync".to_string(), "object_synced".to_string()),
                ("trigger".to_string(), "trigger_skipped".to_string()),
                ("sync_handler".to_string(), "sync_completed".to_string()),
            ]
        );
        assert!(records
            .iter()
            .all(|record| record["request_id"] == "req-42"));
        assert_eq!(
            records[0]["details"]["summary"]["records"][0]["bucket"],
            "test-bucket"
        );
    }
}
