use std::sync::Arc;

use tracing::info;

use drawbridge_store::{MemoryObjectStore, ObjectStore, S3ObjectStore, StoreConfig, StoreError};

/// Build the configured object-store backend.
pub async fn build_store(config: &StoreConfig) -> Result<Arc<dyn ObjectStore>, StoreError> {
    match config.backend.as_str() {
        "memory" => {
            info!("using in-memory object store");
            Ok(Arc::new(MemoryObjectStore::new()))
        }
        "s3" => {
            info!(bucket = %config.bucket, region = %config.region, "using S3 object store");
            Ok(Arc::new(S3ObjectStore::new(config).await))
        }
        other => Err(StoreError::UnknownBackend(other.to_owned())),
    }
}
