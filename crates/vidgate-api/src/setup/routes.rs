//! Route configuration and setup.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use vidgate_core::Config;

use crate::api_doc::ApiDoc;
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;

/// Headroom above the payload ceiling for multipart framing, so the size
/// check in the pipeline is the one that rejects oversized uploads.
const BODY_LIMIT_SLACK: usize = 16 * 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(
            &format!("{}/videos", API_PREFIX),
            post(handlers::video_create::create_video),
        )
        .route(
            &format!("{}/videos/{{id}}", API_PREFIX),
            get(handlers::video_get::get_video),
        )
        .route(
            &format!("{}/videos/{{id}}/upload", API_PREFIX),
            post(handlers::video_upload::upload_video),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .route("/health", get(health))
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::with_openapi("/api/openapi.json", ApiDoc::openapi())
                .path("/docs")
                .into(),
        )
        .layer(DefaultBodyLimit::max(
            config.max_video_size_bytes.saturating_add(BODY_LIMIT_SLACK),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
