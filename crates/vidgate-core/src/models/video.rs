use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Durable video record.
///
/// `video_url` holds the durable storage key (`{geometry}/{filename}`) once an
/// upload has completed; it is `None` for a freshly registered record. The
/// signed form handed to clients is derived per-request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Create a new record with no stored video yet.
    pub fn new(owner_id: Uuid) -> Self {
        let now = Utc::now();
        Video {
            id: Uuid::new_v4(),
            owner_id,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn storage_key(&self) -> Option<&str> {
        self.video_url.as_deref()
    }
}

/// Public view of a video record.
///
/// Mirrors the record's fields with the storage key replaced by a time-limited
/// signed URL (or `null` when nothing has been uploaded).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Signed, time-limited URL to the stored video
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoResponse {
    /// Build a response view, substituting the signed URL for the raw key.
    pub fn from_record(record: &Video, signed_url: Option<String>) -> Self {
        VideoResponse {
            id: record.id,
            owner_id: record.owner_id,
            video_url: signed_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
