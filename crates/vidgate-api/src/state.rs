//! Application state.
//!
//! All collaborator seams (record store, object storage, probe, optimizer) are
//! trait objects so tests can substitute mocks without touching the handlers.

use std::sync::Arc;

use vidgate_core::{Config, VideoRepository};
use vidgate_processing::{GeometryInspector, StreamOptimizer};
use vidgate_storage::Storage;

use crate::auth::JwtService;

pub struct AppState {
    pub config: Config,
    pub repository: Arc<dyn VideoRepository>,
    pub storage: Arc<dyn Storage>,
    pub inspector: Arc<dyn GeometryInspector>,
    pub optimizer: Arc<dyn StreamOptimizer>,
    pub jwt: JwtService,
}
