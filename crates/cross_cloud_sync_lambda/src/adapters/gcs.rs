use bytes::Bytes;
use cross_cloud_sync_core::locations::gcs_bucket_resource;
use google_cloud_storage::client::Storage;

use crate::adapters::object_store::DestinationStore;

pub struct GcsDestinationStore {
    bucket: String,
    storage: Storage,
}

impl GcsDestinationStore {
    pub fn new(bucket: impl Into<String>, storage: Storage) -> Self {
        Self {
            bucket: bucket.into(),
            storage,
        }
    }
}

impl DestinationStore for GcsDestinationStore {
    fn write_object(&self, key: &str, body: &[u8]) -> Result<(), String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let payload = Bytes::copy_from_slice(body);
        let client = self.storage.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .write_object(gcs_bucket_resource(&bucket), object_key.clone(), payload)
                    .send_unbuffered()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        format!("failed to write {object_key} to gcs bucket {bucket}: {error}")
                    })
            })
        })
    }
}
