pub mod health;
pub mod openapi;
pub mod schemas;
pub mod uploads;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use drawbridge_store::{ObjectStore, StoreConfig};

use self::openapi::ApiDoc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The object-store backend uploads are written to.
    pub store: Arc<dyn ObjectStore>,
    /// Store configuration snapshot (bucket/region echoed in responses).
    pub store_config: StoreConfig,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
}

/// Build the Axum router with all routes, middleware, and Swagger UI.
pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    let api = Router::new()
        .route("/health", get(health::health))
        .route("/v1/uploads", post(uploads::upload))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
