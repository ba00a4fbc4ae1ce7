//! Core types for the vidgate video ingestion service.
//!
//! This crate holds configuration, the unified error type, domain models,
//! and the metadata-store seam used by the API layer.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use repository::{InMemoryVideoRepository, VideoRepository};
