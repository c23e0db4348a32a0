use crate::contract::EnvironmentSummary;

pub const GCP_PROJECT_ID_VAR: &str = "GCP_PROJECT_ID";
pub const GCP_REGION_VAR: &str = "GCP_REGION";
pub const S3_BUCKET_VAR: &str = "S3_BUCKET";
pub const GCS_BUCKET_VAR: &str = "GCS_BUCKET";
pub const STRICT_STATUS_VAR: &str = "SYNC_STRICT_STATUS";

/// Validated handler configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub gcp_project_id: String,
    pub gcp_region: String,
    pub s3_bucket: String,
    pub gcs_bucket: String,
    /// Report a failed copy through the envelope status code.
    pub strict_status: bool,
}

impl SyncConfig {
    pub fn environment_summary(&self) -> EnvironmentSummary {
        EnvironmentSummary {
            gcp_project: self.gcp_project_id.clone(),
            gcp_region: self.gcp_region.clone(),
            s3_bucket: self.s3_bucket.clone(),
            gcs_bucket: self.gcs_bucket.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    missing: Vec<&'static str>,
}

impl ConfigError {
    pub fn missing(missing: Vec<&'static str>) -> Self {
        Self { missing }
    }

    pub fn missing_variables(&self) -> &[&'static str] {
        &self.missing
    }

    pub fn message(&self) -> String {
        format!(
            "Missing required environment variables: {}",
            self.missing.join(", ")
        )
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ConfigError {}

/// Resolves the configuration through `lookup`, which maps a variable name to
/// its value. Empty values count as missing.
pub fn load_config(lookup: impl Fn(&str) -> Option<String>) -> Result<SyncConfig, ConfigError> {
    let mut missing = Vec::new();
    let mut required = |name: &'static str| match lookup(name) {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    };

    let gcp_project_id = required(GCP_PROJECT_ID_VAR);
    let gcp_region = required(GCP_REGION_VAR);
    let s3_bucket = required(S3_BUCKET_VAR);
    let gcs_bucket = required(GCS_BUCKET_VAR);

    if !missing.is_empty() {
        return Err(ConfigError::missing(missing));
    }

    Ok(SyncConfig {
        gcp_project_id,
        gcp_region,
        s3_bucket,
        gcs_bucket,
        strict_status: parse_flag(lookup(STRICT_STATUS_VAR).as_deref()),
    })
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|raw| raw.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes")
    )
}
