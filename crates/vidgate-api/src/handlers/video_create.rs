use std::sync::Arc;

use axum::{extract::State, Json};
use vidgate_core::models::{Video, VideoResponse};

use crate::auth::AuthActor;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Register an empty video record owned by the caller. The storage location
/// stays unset until an upload completes.
#[utoipa::path(
    post,
    path = "/api/v0/videos",
    tag = "videos",
    responses(
        (status = 200, description = "Video record created", body = VideoResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    AuthActor(actor_id): AuthActor,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let record = Video::new(actor_id);
    state.repository.insert(record.clone()).await?;

    tracing::info!(video_id = %record.id, owner_id = %actor_id, "Video record created");

    Ok(Json(VideoResponse::from_record(&record, None)))
}
