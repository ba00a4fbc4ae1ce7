//! Application setup: collaborator wiring, routes, server.

pub mod routes;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use vidgate_core::config::StorageBackend;
use vidgate_core::{Config, InMemoryVideoRepository};
use vidgate_processing::{FfmpegOptimizer, FfprobeInspector};
use vidgate_storage::{LocalStorage, S3Storage, Storage};

use crate::auth::JwtService;
use crate::state::AppState;

/// Build the application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let storage: Arc<dyn Storage> = match config.storage_backend {
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| anyhow::anyhow!("S3_BUCKET is required for the s3 backend"))?;
            let region = config
                .s3_region
                .clone()
                .unwrap_or_else(|| "us-east-1".to_string());
            Arc::new(S3Storage::new(bucket, region, config.s3_endpoint.clone())?)
        }
        StorageBackend::Local => Arc::new(
            LocalStorage::new(
                config.local_storage_path.clone(),
                config.local_storage_base_url.clone(),
            )
            .await?,
        ),
    };

    let deadline = Duration::from_secs(config.process_timeout_secs);
    let inspector = Arc::new(FfprobeInspector::new(config.ffprobe_path.clone(), deadline)?);
    let optimizer = Arc::new(FfmpegOptimizer::new(config.ffmpeg_path.clone(), deadline)?);

    tokio::fs::create_dir_all(&config.assets_root).await?;

    let jwt = JwtService::new(&config.jwt_secret);

    let state = Arc::new(AppState {
        config: config.clone(),
        repository: Arc::new(InMemoryVideoRepository::new()),
        storage,
        inspector,
        optimizer,
        jwt,
    });

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
