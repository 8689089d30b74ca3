use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StoreError;

/// Pluggable storage backend for uploaded files.
///
/// Keys are generated fresh per upload ([`crate::key::GeneratedKey`]), so a
/// `put` never lands on an existing object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store one object under `key`.
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> Result<(), StoreError>;

    /// Retrieve an object's content. Returns `None` if the key does not
    /// exist.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError>;
}
