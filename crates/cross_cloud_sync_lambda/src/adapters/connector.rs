use cross_cloud_sync_core::config::SyncConfig;
use google_cloud_storage::client::Storage;

use crate::adapters::gcs::GcsDestinationStore;
use crate::adapters::object_store::{ConnectedStores, StoreConnector};
use crate::adapters::s3::S3SourceStore;

/// Connects S3 as the source and Cloud Storage as the destination, using each
/// SDK's default credential chain.
pub struct CloudStoreConnector {
    aws_config: aws_config::SdkConfig,
}

impl CloudStoreConnector {
    pub fn new(aws_config: aws_config::SdkConfig) -> Self {
        Self { aws_config }
    }
}

impl StoreConnector for CloudStoreConnector {
    fn connect(&self, config: &SyncConfig) -> Result<ConnectedStores, String> {
        let s3_client = aws_sdk_s3::Client::new(&self.aws_config);
        let project_id = config.gcp_project_id.clone();

        let storage = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current()
                .block_on(async move { Storage::builder().build().await })
        })
        .map_err(|error| {
            format!("failed to initialize cloud storage client for project {project_id}: {error}")
        })?;

        Ok(ConnectedStores {
            source: Box::new(S3SourceStore::new(config.s3_bucket.clone(), s3_client)),
            destination: Box::new(GcsDestinationStore::new(config.gcs_bucket.clone(), storage)),
        })
    }
}
