//! Video upload service

mod service;
mod types;

pub use service::VideoUploadService;
pub use types::ValidatedUpload;
