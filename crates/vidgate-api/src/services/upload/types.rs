//! Types used by the video upload service

/// Extracted and validated upload payload
pub struct ValidatedUpload {
    pub data: Vec<u8>,
    pub content_type: String,
}
