use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, error, instrument};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::store::ObjectStore;

/// AWS S3 [`ObjectStore`] backend.
///
/// The SDK client is built from the standard environment credential chain;
/// the endpoint URL can be overridden for local development (`LocalStack`).
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl std::fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ObjectStore")
            .field("bucket", &self.bucket)
            .field("client", &"<S3Client>")
            .finish()
    }
}

impl S3ObjectStore {
    /// Build an `S3ObjectStore` from the store configuration.
    pub async fn new(config: &StoreConfig) -> Self {
        let mut loader =
            aws_config::from_env().region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            debug!(endpoint = %endpoint, "using custom S3 endpoint");
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        let client = aws_sdk_s3::Client::new(&sdk_config);

        Self {
            client,
            bucket: config.bucket.clone(),
        }
    }

    /// Create an `S3ObjectStore` with a pre-built client (for testing).
    pub fn with_client(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[instrument(skip(self, data), fields(bucket = %self.bucket, key = %key, size = data.len()))]
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> Result<(), StoreError> {
        debug!("uploading object to S3");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(aws_sdk_s3::primitives::ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "S3 put_object failed");
                StoreError::Backend(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self), fields(bucket = %self.bucket, key = %key))]
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match response {
            Ok(output) => {
                let data = output
                    .body
                    .collect()
                    .await
                    .map_err(|e| StoreError::Backend(e.to_string()))?
                    .into_bytes();
                Ok(Some(data))
            }
            Err(err) => {
                if err.as_service_error().is_some_and(|e| e.is_no_such_key()) {
                    return Ok(None);
                }
                error!(error = %err, "S3 get_object failed");
                Err(StoreError::Backend(err.to_string()))
            }
        }
    }
}
