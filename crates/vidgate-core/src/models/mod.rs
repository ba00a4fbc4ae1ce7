//! Domain models

pub mod video;

pub use video::{Video, VideoResponse};
