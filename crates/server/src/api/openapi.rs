use utoipa::OpenApi;

use drawbridge_core::{StoredObject, StoredObjectMeta};

use super::schemas::{ErrorResponse, HealthResponse};

/// OpenAPI document for the upload service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Drawbridge Upload Service",
        version = "0.1.0",
        description = "HTTP API for the Drawbridge upload service. Stores chat-attachment drawing files in an object store.",
        license(name = "Apache-2.0")
    ),
    paths(super::health::health, super::uploads::upload),
    components(schemas(StoredObject, StoredObjectMeta, HealthResponse, ErrorResponse)),
    tags(
        (name = "Uploads", description = "Drawing upload"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
