use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bytes::Bytes;
use regex::Regex;
use tower::ServiceExt;

use drawbridge_core::StoredObject;
use drawbridge_server::api::{AppState, router};
use drawbridge_store::{MemoryObjectStore, ObjectStore, StoreConfig, StoreError};

// -- Failing store --------------------------------------------------------

struct FailingStore;

#[async_trait]
impl ObjectStore for FailingStore {
    async fn put(&self, _key: &str, _content_type: &str, _data: Bytes) -> Result<(), StoreError> {
        Err(StoreError::Backend("injected store failure".into()))
    }

    async fn get(&self, _key: &str) -> Result<Option<Bytes>, StoreError> {
        Err(StoreError::Backend("injected store failure".into()))
    }
}

// -- Helpers --------------------------------------------------------------

const BOUNDARY: &str = "drawbridge-test-boundary";

fn build_state(store: Arc<dyn ObjectStore>) -> AppState {
    AppState {
        store,
        store_config: StoreConfig::default(),
        max_upload_bytes: 1024 * 1024,
    }
}

fn multipart_body(part_name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{part_name}\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    if !content_type.is_empty() {
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(part_name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/uploads")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(part_name, file_name, content_type, data)))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// -- Tests ----------------------------------------------------------------

#[tokio::test]
async fn health_returns_200_with_backend() {
    let app = router(build_state(Arc::new(MemoryObjectStore::new())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["backend"], "memory");
}

#[tokio::test]
async fn upload_dwg_returns_stored_object() {
    let store = Arc::new(MemoryObjectStore::new());
    let app = router(build_state(store.clone()));

    let response = app
        .oneshot(upload_request("file", "Floor Plan.dwg", "", b"dwg-bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let object: StoredObject = serde_json::from_value(json).unwrap();

    let pattern = Regex::new(r"^user-uploads/drawings/\d{4}/\d{2}/[0-9a-f-]{36}\.dwg$").unwrap();
    assert!(pattern.is_match(&object.key), "key was {}", object.key);
    assert_eq!(object.bucket, "drawbridge-uploads");
    assert_eq!(object.region, "us-east-1");
    assert_eq!(object.metadata.original_name, "Floor Plan.dwg");
    assert_eq!(object.metadata.size, 9);
    // No declared type on the part, so the type comes from the extension.
    assert_eq!(object.metadata.mime_type, "image/vnd.dwg");
    assert!(object.key.ends_with(&object.metadata.filename));

    // The object is durably in the store under the returned key.
    assert_eq!(store.len(), 1);
    let stored = store.get(&object.key).await.unwrap();
    assert_eq!(stored, Some(Bytes::from_static(b"dwg-bytes")));
    assert_eq!(store.content_type(&object.key), Some("image/vnd.dwg".into()));
}

#[tokio::test]
async fn missing_file_part_returns_400() {
    let app = router(build_state(Arc::new(MemoryObjectStore::new())));

    let response = app
        .oneshot(upload_request("attachment", "plan.dwg", "", b"data"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("missing file part"));
}

#[tokio::test]
async fn disallowed_extension_returns_400() {
    let store = Arc::new(MemoryObjectStore::new());
    let app = router(build_state(store.clone()));

    let response = app
        .oneshot(upload_request("file", "notes.txt", "text/plain", b"text"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("not allowed"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn wrong_method_returns_405() {
    let app = router(build_state(Arc::new(MemoryObjectStore::new())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/uploads")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn store_failure_returns_500() {
    let app = router(build_state(Arc::new(FailingStore)));

    let response = app
        .oneshot(upload_request("file", "plan.dwg", "image/vnd.dwg", b"data"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("upload failed"));
}

#[tokio::test]
async fn identical_names_get_distinct_keys() {
    let store = Arc::new(MemoryObjectStore::new());

    let mut keys = Vec::new();
    for _ in 0..2 {
        let app = router(build_state(store.clone()));
        let response = app
            .oneshot(upload_request("file", "plan.dxf", "image/vnd.dxf", b"data"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let object: StoredObject = serde_json::from_value(response_json(response).await).unwrap();
        keys.push(object.key);
    }

    assert_ne!(keys[0], keys[1]);
    assert_eq!(store.len(), 2);
}
