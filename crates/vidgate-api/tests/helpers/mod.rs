//! Test helpers: build AppState and router with mocked process seams.
//!
//! Integration tests run against the real router, local object storage in a
//! temp dir, the in-memory repository, and mock inspector/optimizer
//! implementations so no ffmpeg/ffprobe binaries are needed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;
use uuid::Uuid;
use vidgate_api::auth::JwtService;
use vidgate_api::constants;
use vidgate_api::setup::routes::setup_routes;
use vidgate_api::state::AppState;
use vidgate_core::config::StorageBackend;
use vidgate_core::{Config, InMemoryVideoRepository};
use vidgate_processing::{Geometry, GeometryInspector, ProcessError, StreamOptimizer};
use vidgate_storage::LocalStorage;

/// Marker appended by the mock optimizer, so tests can tell optimized bytes
/// from the raw upload.
pub const OPTIMIZED_MARKER: &[u8] = b"+faststart";

/// API path helper (e.g. `/api/v0/videos`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Inspector that always returns a fixed geometry.
pub struct FixedInspector(pub Geometry);

#[async_trait]
impl GeometryInspector for FixedInspector {
    async fn inspect(&self, _path: &Path) -> Result<Geometry, ProcessError> {
        Ok(self.0)
    }
}

/// Optimizer that copies the input to `{path}.processed` with a marker
/// appended, standing in for the faststart remux.
pub struct MarkerOptimizer;

#[async_trait]
impl StreamOptimizer for MarkerOptimizer {
    async fn optimize(&self, path: &Path) -> Result<PathBuf, ProcessError> {
        let mut data = tokio::fs::read(path).await.map_err(|e| ProcessError::Spawn {
            tool: "ffmpeg",
            source: e,
        })?;
        data.extend_from_slice(OPTIMIZED_MARKER);

        let mut os = path.as_os_str().to_os_string();
        os.push(".processed");
        let out_path = PathBuf::from(os);

        tokio::fs::write(&out_path, data)
            .await
            .map_err(|e| ProcessError::Spawn {
                tool: "ffmpeg",
                source: e,
            })?;
        Ok(out_path)
    }
}

/// Optimizer that fails the way a crashed remux does.
pub struct FailingOptimizer;

#[async_trait]
impl StreamOptimizer for FailingOptimizer {
    async fn optimize(&self, _path: &Path) -> Result<PathBuf, ProcessError> {
        Err(ProcessError::Failed {
            tool: "ffmpeg",
            stderr: "moov atom not found".to_string(),
        })
    }
}

/// Test application: server plus owned resources and seams.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub assets_dir: TempDir,
    pub storage_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Bearer token for an actor, signed with the test secret.
    pub fn token_for(&self, actor_id: Uuid) -> String {
        self.state
            .jwt
            .issue(actor_id, chrono::Duration::hours(1))
            .unwrap()
    }

    /// Number of files currently staged under the assets root.
    pub fn staged_file_count(&self) -> usize {
        count_files(self.assets_dir.path())
    }

    /// Number of objects currently in durable storage.
    pub fn stored_object_count(&self) -> usize {
        count_files(self.storage_dir.path())
    }
}

fn count_files(dir: &Path) -> usize {
    let mut count = 0;
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        if let Ok(entries) = std::fs::read_dir(&current) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Setup test app with default seams: landscape inspector, marker optimizer.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(
        Arc::new(FixedInspector(Geometry::Landscape)),
        Arc::new(MarkerOptimizer),
        8 * 1024 * 1024,
    )
    .await
}

/// Setup test app with explicit seams and size ceiling.
pub async fn setup_test_app_with(
    inspector: Arc<dyn GeometryInspector>,
    optimizer: Arc<dyn StreamOptimizer>,
    max_video_size_bytes: usize,
) -> TestApp {
    let assets_dir = TempDir::new().unwrap();
    let storage_dir = TempDir::new().unwrap();

    let config = Config {
        server_port: 0,
        assets_root: assets_dir.path().to_path_buf(),
        jwt_secret: "test-secret".to_string(),
        storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: storage_dir.path().to_path_buf(),
        local_storage_base_url: "http://localhost:3000/files".to_string(),
        ffprobe_path: "ffprobe".to_string(),
        ffmpeg_path: "ffmpeg".to_string(),
        max_video_size_bytes,
        video_allowed_content_types: vec!["video/mp4".to_string()],
        presign_ttl_secs: 3600,
        process_timeout_secs: 30,
    };

    let storage = LocalStorage::new(
        storage_dir.path(),
        config.local_storage_base_url.clone(),
    )
    .await
    .unwrap();

    let state = Arc::new(AppState {
        config: config.clone(),
        repository: Arc::new(InMemoryVideoRepository::new()),
        storage: Arc::new(storage),
        inspector,
        optimizer,
        jwt: JwtService::new(&config.jwt_secret),
    });

    let router = setup_routes(&config, state.clone());
    let server = TestServer::new(router).unwrap();

    TestApp {
        server,
        state,
        assets_dir,
        storage_dir,
    }
}
