//! Path extraction with the unified JSON error body.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;
use vidgate_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Record id path parameter.
///
/// Same as `Path<Uuid>`, but a malformed id renders as the standard
/// `ErrorResponse` JSON instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub Uuid);

impl FromRequestParts<Arc<AppState>> for RecordId {
    type Rejection = HttpAppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|e| HttpAppError(AppError::InvalidInput(e.body_text())))?;
        Ok(RecordId(id))
    }
}
