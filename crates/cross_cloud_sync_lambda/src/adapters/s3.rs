use aws_sdk_s3::error::DisplayErrorContext;

use crate::adapters::object_store::SourceStore;

pub struct S3SourceStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl S3SourceStore {
    pub fn new(bucket: impl Into<String>, s3_client: aws_sdk_s3::Client) -> Self {
        Self {
            bucket: bucket.into(),
            s3_client,
        }
    }
}

impl SourceStore for S3SourceStore {
    fn read_object(&self, key: &str) -> Result<Vec<u8>, String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(fetch_object(client, bucket, object_key))
        })
    }
}

async fn fetch_object(
    client: aws_sdk_s3::Client,
    bucket: String,
    object_key: String,
) -> Result<Vec<u8>, String> {
    let output = client
        .get_object()
        .bucket(&bucket)
        .key(&object_key)
        .send()
        .await
        .map_err(|error| {
            format!(
                "failed to read {object_key} from s3 bucket {bucket}: {}",
                DisplayErrorContext(&error)
            )
        })?;

    let body = output.body.collect().await.map_err(|error| {
        format!("failed to stream {object_key} from s3 bucket {bucket}: {error}")
    })?;

    Ok(body.into_bytes().to_vec())
}
