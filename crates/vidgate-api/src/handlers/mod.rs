//! HTTP handlers

pub mod video_create;
pub mod video_get;
pub mod video_upload;

use std::time::Duration;

use vidgate_core::models::{Video, VideoResponse};

use crate::error::{app_error_from_storage, HttpAppError};
use crate::state::AppState;

/// Build the public view of a record, substituting a freshly signed URL for
/// the stored key. The signed form is derived per request and never persisted.
pub(crate) async fn signed_view(
    state: &AppState,
    record: &Video,
) -> Result<VideoResponse, HttpAppError> {
    let signed_url = match record.storage_key() {
        Some(key) => Some(
            state
                .storage
                .presigned_url(key, Duration::from_secs(state.config.presign_ttl_secs))
                .await
                .map_err(app_error_from_storage)?,
        ),
        None => None,
    };
    Ok(VideoResponse::from_record(record, signed_url))
}
