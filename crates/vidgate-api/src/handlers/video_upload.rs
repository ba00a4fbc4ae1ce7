use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use uuid::Uuid;
use vidgate_core::models::VideoResponse;

use crate::auth::AuthActor;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::signed_view;
use crate::services::upload::VideoUploadService;
use crate::state::AppState;
use crate::utils::path::RecordId;

/// Upload an MP4 against an owned record.
///
/// The payload is staged locally, probed for geometry, rewritten for
/// progressive playback, pushed to durable storage under
/// `{geometry}/{staged-name}`, and the record is updated to point at the new
/// object. The response mirrors the record with a signed URL in place of the
/// storage key.
#[utoipa::path(
    post,
    path = "/api/v0/videos/{id}/upload",
    tag = "videos",
    params(
        ("id" = Uuid, Path, description = "Video record id")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Actor does not own the record", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Processing or storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    AuthActor(actor_id): AuthActor,
    RecordId(id): RecordId,
    multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let service = VideoUploadService::new(&state);
    let record = service.upload(actor_id, id, multipart).await?;

    let view = signed_view(&state, &record).await?;
    Ok(Json(view))
}
