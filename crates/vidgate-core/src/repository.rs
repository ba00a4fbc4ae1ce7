//! Metadata store seam.
//!
//! The record store is an external collaborator from the pipeline's point of
//! view: `get` reads a record once, `update` writes it back exactly once per
//! successful upload. The in-memory implementation backs tests and
//! single-process deployments; a database-backed store plugs in behind the
//! same trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Video;

/// Metadata store for video records.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Fetch a record by id, `None` if absent.
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Insert a new record.
    async fn insert(&self, record: Video) -> Result<(), AppError>;

    /// Persist an updated record. Fails with `NotFound` if the record is absent.
    async fn update(&self, record: Video) -> Result<(), AppError>;
}

/// In-memory video repository keyed by record id.
#[derive(Default)]
pub struct InMemoryVideoRepository {
    records: Arc<RwLock<HashMap<Uuid, Video>>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert(&self, record: Video) -> Result<(), AppError> {
        self.records.write().await.insert(record.id, record);
        Ok(())
    }

    async fn update(&self, record: Video) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(AppError::NotFound(format!("video {}", record.id)));
        }
        records.insert(record.id, record);
        Ok(())
    }
}
