use std::time::Instant;

use cross_cloud_sync_core::contract::{SyncResult, CONFIG_OBJECT_KEY};
use cross_cloud_sync_core::locations::{gcs_uri, s3_uri};
use serde_json::json;

use crate::adapters::invocation_log::InvocationLog;
use crate::adapters::object_store::{DestinationStore, SourceStore};

/// Copies the application configuration object from S3 to Cloud Storage.
///
/// Failures are reported in the returned [`SyncResult`], never raised.
pub fn sync_configuration_file(
    source: &dyn SourceStore,
    destination: &dyn DestinationStore,
    s3_bucket: &str,
    gcs_bucket: &str,
    log: &InvocationLog,
) -> SyncResult {
    sync_object(
        source,
        destination,
        s3_bucket,
        gcs_bucket,
        CONFIG_OBJECT_KEY,
        log,
    )
}

pub fn sync_object(
    source: &dyn SourceStore,
    destination: &dyn DestinationStore,
    s3_bucket: &str,
    gcs_bucket: &str,
    key: &str,
    log: &InvocationLog,
) -> SyncResult {
    let started_at = Instant::now();
    let source_uri = s3_uri(s3_bucket, key);
    let destination_uri = gcs_uri(gcs_bucket, key);

    let copied = source.read_object(key).and_then(|body| {
        destination.write_object(key, &body)?;
        Ok(body.len())
    });

    match copied {
        Ok(size) => {
            log.info(
                "object_synced",
                json!({
                    "file": key,
                    "size": size,
                    "source": source_uri.clone(),
                    "destination": destination_uri.clone(),
                    "duration_ms": started_at.elapsed().as_millis(),
                }),
            );
            SyncResult::Success {
                file: key.to_string(),
                size,
                source: source_uri,
                destination: destination_uri,
            }
        }
        Err(error) => {
            log.error(
                "object_sync_failed",
                json!({
                    "file": key,
                    "source": source_uri,
                    "destination": destination_uri,
                    "duration_ms": started_at.elapsed().as_millis(),
                    "error": error.clone(),
                }),
            );
            SyncResult::Error { error }
        }
    }
}
