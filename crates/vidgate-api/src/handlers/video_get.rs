use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;
use vidgate_core::models::VideoResponse;
use vidgate_core::AppError;

use crate::auth::AuthActor;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::signed_view;
use crate::state::AppState;
use crate::utils::path::RecordId;

/// Fetch a video record. When a video has been uploaded, the response carries
/// a fresh time-limited signed URL in place of the storage key.
#[utoipa::path(
    get,
    path = "/api/v0/videos/{id}",
    tag = "videos",
    params(
        ("id" = Uuid, Path, description = "Video record id")
    ),
    responses(
        (status = 200, description = "Video record", body = VideoResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    _actor: AuthActor,
    RecordId(id): RecordId,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let record = state
        .repository
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("video {}", id)))?;

    let view = signed_view(&state, &record).await?;
    Ok(Json(view))
}
