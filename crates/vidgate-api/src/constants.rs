//! API constants

/// API path prefix for all versioned routes.
pub const API_PREFIX: &str = "/api/v0";

/// The single accepted multipart field name for uploads.
pub const UPLOAD_FIELD_NAME: &str = "video";
