use serde::Deserialize;

/// Configuration for the object-store backend.
///
/// Credentials are never configured here: the S3 backend uses the standard
/// AWS SDK environment credential chain.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Which backend to use: `"memory"` or `"s3"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// AWS region for the S3 backend.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket uploads are written to.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Endpoint URL override for local development (e.g. `LocalStack`).
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

fn default_backend() -> String {
    "memory".to_owned()
}

fn default_region() -> String {
    "us-east-1".to_owned()
}

fn default_bucket() -> String {
    "drawbridge-uploads".to_owned()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            region: default_region(),
            bucket: default_bucket(),
            endpoint_url: None,
        }
    }
}

impl StoreConfig {
    /// Apply environment overrides on top of the file-loaded values.
    ///
    /// `AWS_REGION` overrides the region, `DRAWBRIDGE_BUCKET` the bucket,
    /// and `DRAWBRIDGE_S3_ENDPOINT` the endpoint URL.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(region) = std::env::var("AWS_REGION") {
            self.region = region;
        }
        if let Ok(bucket) = std::env::var("DRAWBRIDGE_BUCKET") {
            self.bucket = bucket;
        }
        if let Ok(endpoint) = std::env::var("DRAWBRIDGE_S3_ENDPOINT") {
            self.endpoint_url = Some(endpoint);
        }
    }
}
