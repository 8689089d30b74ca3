use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::error::StoreError;
use crate::store::ObjectStore;

/// A single stored object.
#[derive(Debug, Clone)]
struct StoredEntry {
    content_type: String,
    data: Bytes,
}

/// In-memory [`ObjectStore`] backed by a [`DashMap`].
///
/// Used by tests and local development. Fully synchronous internally; the
/// async trait methods return immediately.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: DashMap<String, StoredEntry>,
}

impl MemoryObjectStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The content type recorded for `key`, if the object exists.
    pub fn content_type(&self, key: &str) -> Option<String> {
        self.objects.get(key).map(|entry| entry.content_type.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> Result<(), StoreError> {
        self.objects.insert(
            key.to_owned(),
            StoredEntry {
                content_type: content_type.to_owned(),
                data,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        Ok(self.objects.get(key).map(|entry| entry.data.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryObjectStore::new();
        store
            .put("user-uploads/drawings/2026/08/a.dwg", "image/vnd.dwg", Bytes::from_static(b"dwg"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        let data = store.get("user-uploads/drawings/2026/08/a.dwg").await.unwrap();
        assert_eq!(data, Some(Bytes::from_static(b"dwg")));
        assert_eq!(
            store.content_type("user-uploads/drawings/2026/08/a.dwg"),
            Some("image/vnd.dwg".to_owned())
        );
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryObjectStore::new();
        assert_eq!(store.get("nope").await.unwrap(), None);
        assert!(store.is_empty());
    }
}
