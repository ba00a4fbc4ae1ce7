//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use vidgate_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "vidgate API",
        version = "0.1.0",
        description = "Video ingestion API: upload MP4 files against owned records; videos are \
                       remuxed for progressive playback and served through time-limited signed URLs."
    ),
    paths(
        handlers::video_create::create_video,
        handlers::video_get::get_video,
        handlers::video_upload::upload_video,
    ),
    components(schemas(models::VideoResponse, error::ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "videos", description = "Video record and upload operations")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
