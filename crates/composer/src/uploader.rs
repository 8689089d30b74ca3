use async_trait::async_trait;
use bytes::Bytes;

use drawbridge_client::UploadClient;
use drawbridge_core::StoredObject;

/// Seam between block building and the upload transport.
///
/// [`UploadClient`] is the production implementation; tests substitute
/// mocks.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload one file and return the stored object's location and
    /// metadata.
    async fn upload(
        &self,
        file_name: &str,
        media_type: &str,
        data: Bytes,
    ) -> Result<StoredObject, drawbridge_client::Error>;
}

#[async_trait]
impl Uploader for UploadClient {
    async fn upload(
        &self,
        file_name: &str,
        media_type: &str,
        data: Bytes,
    ) -> Result<StoredObject, drawbridge_client::Error> {
        UploadClient::upload(self, file_name, media_type, data).await
    }
}
