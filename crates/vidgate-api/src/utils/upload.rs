//! Common utilities for the upload handler

use axum::extract::Multipart;
use vidgate_core::AppError;

use crate::constants::UPLOAD_FIELD_NAME;

/// Extract file data and content type from a multipart form.
///
/// Exactly one field named "video" is accepted, and it must be a real file
/// part (carrying a filename), not a bare text field. Multiple file fields
/// are rejected.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
) -> Result<(Vec<u8>, String), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == UPLOAD_FIELD_NAME {
            if file_data.is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Multiple file fields are not allowed; send exactly one field named '{}'",
                    UPLOAD_FIELD_NAME
                )));
            }
            if field.file_name().is_none() {
                return Err(AppError::InvalidInput(format!(
                    "Field '{}' must be a file part, not a plain value",
                    UPLOAD_FIELD_NAME
                )));
            }
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data.to_vec());
        }
    }

    let file_data = file_data
        .ok_or_else(|| AppError::InvalidInput("No video file provided".to_string()))?;
    let content_type =
        content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    Ok((file_data, content_type))
}

/// Validate file size against the configured ceiling.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::InvalidInput(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against the allowlist. Compares the normalized MIME
/// type only (no parameter bypass).
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(AppError::InvalidInput(format!(
            "Invalid content type. Allowed types: {}",
            allowed_types.join(", ")
        )));
    }
    Ok(())
}

/// Extension derived from the MIME subtype ("video/mp4" -> "mp4").
pub fn mime_subtype(content_type: &str) -> Result<&str, AppError> {
    normalize_mime_type(content_type)
        .split('/')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("Malformed content type: {}", content_type)))
}
