//! Upload coordinator
//!
//! One sequential workflow per request: extract → validate → stage → inspect
//! geometry → optimize stream layout → store durably → persist record. No step
//! starts before the previous completes, and every staged temporary is owned
//! by a scoped guard so it cannot outlive the request.

use std::sync::Arc;

use axum::extract::Multipart;
use chrono::Utc;
use uuid::Uuid;
use vidgate_core::{models::Video, AppError};
use vidgate_processing::StagedFile;

use crate::error::{app_error_from_process, app_error_from_storage};
use crate::state::AppState;
use crate::utils::upload::{
    extract_multipart_file, mime_subtype, validate_content_type, validate_file_size,
};

use super::types::ValidatedUpload;

pub struct VideoUploadService {
    state: Arc<AppState>,
}

impl VideoUploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Run the full upload pipeline for one record.
    ///
    /// Preconditions are checked in order, each a distinct failure: payload
    /// present and file-like, size within ceiling, record exists, actor owns
    /// the record, content type is the accepted value. Nothing is written,
    /// locally or durably, before all of them pass.
    pub async fn upload(
        &self,
        actor_id: Uuid,
        video_id: Uuid,
        multipart: Multipart,
    ) -> Result<Video, AppError> {
        let validated = self.extract_and_validate(multipart).await?;

        let mut record = self
            .state
            .repository
            .get(video_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("video {}", video_id)))?;

        if record.owner_id != actor_id {
            return Err(AppError::Forbidden(
                "Authenticated actor does not own this video".to_string(),
            ));
        }

        validate_content_type(
            &validated.content_type,
            &self.state.config.video_allowed_content_types,
        )?;

        let storage_key = self.process_and_store(&validated).await?;

        record.video_url = Some(storage_key.clone());
        record.updated_at = Utc::now();
        if let Err(e) = self.state.repository.update(record.clone()).await {
            // The object was already uploaded; without a compensating delete it
            // stays orphaned. Log the key so operators can sweep it.
            tracing::warn!(
                key = %storage_key,
                video_id = %video_id,
                error = %e,
                "Record update failed after durable upload; object orphaned"
            );
            return Err(e);
        }

        tracing::info!(
            video_id = %video_id,
            key = %storage_key,
            "Video upload completed"
        );

        Ok(record)
    }

    /// Extract the payload from the multipart request and enforce the size ceiling.
    async fn extract_and_validate(
        &self,
        multipart: Multipart,
    ) -> Result<ValidatedUpload, AppError> {
        let (data, content_type) = extract_multipart_file(multipart).await?;
        validate_file_size(data.len(), self.state.config.max_video_size_bytes)?;
        Ok(ValidatedUpload { data, content_type })
    }

    /// Stage, probe, optimize and push to durable storage.
    ///
    /// Returns the derived storage key. Both temporaries (the staged upload
    /// and the optimizer output) are deleted before returning; on any failure
    /// the guards clean up on drop.
    async fn process_and_store(&self, upload: &ValidatedUpload) -> Result<String, AppError> {
        let extension = mime_subtype(&upload.content_type)?;

        let staged = StagedFile::create(
            &self.state.config.assets_root,
            extension,
            &upload.data,
        )
        .await?;
        let staged_name = staged.file_name();

        let geometry = self
            .state
            .inspector
            .inspect(staged.path())
            .await
            .map_err(app_error_from_process)?;

        let optimized_path = self
            .state
            .optimizer
            .optimize(staged.path())
            .await
            .map_err(app_error_from_process)?;
        let optimized = StagedFile::adopt(optimized_path);

        // The optimizer output is authoritative from here on.
        staged.remove().await?;

        let storage_key = format!("{}/{}", geometry.as_str(), staged_name);

        let optimized_data = tokio::fs::read(optimized.path()).await?;
        self.state
            .storage
            .put(&storage_key, optimized_data, &upload.content_type)
            .await
            .map_err(app_error_from_storage)?;

        optimized.remove().await?;

        Ok(storage_key)
    }
}
