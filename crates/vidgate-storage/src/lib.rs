//! Durable object storage for vidgate.
//!
//! This crate provides the `Storage` trait and its backends. Keys are supplied
//! by the caller (the upload pipeline derives them as `{geometry}/{filename}`);
//! backends store and sign exactly the key they are given. Keys must not
//! contain `..` or a leading `/`.

#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
