//! Drawbridge HTTP client.
//!
//! A native Rust client for the Drawbridge upload service. One call, one
//! multipart round trip: the file bytes go up, the stored object's location
//! and metadata come back.
//!
//! # Quick Start
//!
//! ```no_run
//! use bytes::Bytes;
//! use drawbridge_client::UploadClient;
//!
//! # async fn example() -> Result<(), drawbridge_client::Error> {
//! let client = UploadClient::new("http://localhost:8080");
//!
//! let object = client
//!     .upload("floor-plan.dwg", "image/vnd.dwg", Bytes::from_static(b"..."))
//!     .await?;
//! println!("stored as {}", object.key);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Use the builder for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use drawbridge_client::UploadClientBuilder;
//!
//! let client = UploadClientBuilder::new("http://localhost:8080")
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

mod error;

pub use error::Error;

// Re-export the wire type so callers don't need a direct `drawbridge-core`
// dependency.
pub use drawbridge_core::StoredObject;

use std::time::Duration;

use bytes::Bytes;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by the upload service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the Drawbridge upload service.
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    base_url: String,
}

/// Builder for configuring an [`UploadClient`].
#[derive(Debug)]
pub struct UploadClientBuilder {
    base_url: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl UploadClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a pre-built [`reqwest::Client`] instead of constructing one.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<UploadClient, Error> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };

        Ok(UploadClient {
            client,
            base_url: self.base_url,
        })
    }
}

impl UploadClient {
    /// Create a client with default configuration.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Upload one file to the service.
    ///
    /// Performs a single `POST {base}/v1/uploads` with a multipart body whose
    /// only part is named `file`. Any non-success response is a failed
    /// upload; the service never leaves a partial write visible.
    #[instrument(skip(self, data), fields(file_name = %file_name, size = data.len()))]
    pub async fn upload(
        &self,
        file_name: &str,
        media_type: &str,
        data: Bytes,
    ) -> Result<StoredObject, Error> {
        let mut part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name.to_owned());
        if !media_type.is_empty() {
            part = part
                .mime_str(media_type)
                .map_err(|e| Error::Configuration(format!("invalid media type '{media_type}': {e}")))?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/v1/uploads", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let object = response
                .json::<StoredObject>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))?;
            debug!(key = %object.key, "upload accepted");
            Ok(object)
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| Error::Connection(e.to_string()))?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or_else(|_| if text.is_empty() { status.to_string() } else { text });
            Err(Error::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Check whether the service is up.
    pub async fn health(&self) -> Result<bool, Error> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(response.status().is_success())
    }
}
