#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    S3,
    Gcs,
}

impl Provider {
    pub fn scheme(self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Gcs => "gs",
        }
    }
}

pub fn object_uri(provider: Provider, bucket: &str, key: &str) -> String {
    format!(
        "{}://{}/{}",
        provider.scheme(),
        bucket,
        key.trim_start_matches('/')
    )
}

pub fn s3_uri(bucket: &str, key: &str) -> String {
    object_uri(Provider::S3, bucket, key)
}

pub fn gcs_uri(bucket: &str, key: &str) -> String {
    object_uri(Provider::Gcs, bucket, key)
}

/// Resource name the Cloud Storage API expects for a bucket.
pub fn gcs_bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{bucket}")
}
