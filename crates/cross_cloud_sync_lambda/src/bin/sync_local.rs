//! Runs the sync handler once outside Lambda with a mock S3 put event and
//! mock configuration, printing the response envelope as pretty JSON.

use std::collections::HashMap;

use clap::Parser;
use cross_cloud_sync_lambda::adapters::connector::CloudStoreConnector;
use cross_cloud_sync_lambda::adapters::invocation_log::InvocationLog;
use cross_cloud_sync_lambda::adapters::object_store::{InMemoryConnector, StoreConnector};
use cross_cloud_sync_lambda::handlers::entry::handle_sync_event;
use cross_cloud_sync_lambda::runtime::config::{
    GCP_PROJECT_ID_VAR, GCP_REGION_VAR, GCS_BUCKET_VAR, S3_BUCKET_VAR,
};
use cross_cloud_sync_lambda::runtime::contract::CONFIG_OBJECT_KEY;
use lambda_runtime::Error;
use serde_json::{json, Value};

const MOCK_REQUEST_ID: &str = "local-invocation";

#[derive(Parser)]
#[command(
    name = "sync_local",
    about = "Invoke the cross-cloud sync handler locally with mock inputs"
)]
struct Cli {
    /// Use in-memory buckets seeded with a sample configuration object
    /// instead of S3 and Cloud Storage
    #[arg(long)]
    in_memory: bool,
}

fn mock_event() -> Value {
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

fn mock_environment() -> HashMap<&'static str, String> {
    HashMap::from([
        (GCP_PROJECT_ID_VAR, "test-project".to_string()),
        (GCP_REGION_VAR, "us-central1".to_string()),
        (S3_BUCKET_VAR, "test-s3-bucket".to_string()),
        (GCS_BUCKET_VAR, "test-gcs-bucket".to_string()),
    ])
}

fn sample_config_object() -> Vec<u8> {
    json!({
        "service": "cross-cloud-sync",
        "log_level": "info",
        "regions": {"aws": "us-west-2", "gcp": "us-central1"},
    })
    .to_string()
    .into_bytes()
}

fn in_memory_connector() -> InMemoryConnector {
    let connector = InMemoryConnector::default();
    connector
        .source
        .seed_object(CONFIG_OBJECT_KEY, &sample_config_object());
    connector
}

fn invoke_locally(connector: &dyn StoreConnector) -> Result<String, Error> {
    let environment = mock_environment();
    let lookup = |name: &str| {
        environment
            .get(name)
            .cloned()
            .or_else(|| std::env::var(name).ok())
    };

    let log = InvocationLog::stderr("sync_handler").with_request_id(MOCK_REQUEST_ID);
    let envelope = handle_sync_event(&mock_event(), &lookup, connector, &log);
    Ok(serde_json::to_string_pretty(&envelope)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let output = if cli.in_memory {
        invoke_locally(&in_memory_connector())?
    } else {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        invoke_locally(&CloudStoreConnector::new(aws_config))?
    };

    println!("{output}");
    Ok(())
}
