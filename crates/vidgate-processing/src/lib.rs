//! Media processing for vidgate.
//!
//! The external probe and remux tools live behind the `GeometryInspector` and
//! `StreamOptimizer` seams so the pipeline's only non-deterministic,
//! environment-dependent parts can be mocked in tests. `StagedFile` owns the
//! request-scoped temporary files and guarantees their removal on every exit
//! path.

pub mod error;
pub mod staging;
pub mod video;

pub use error::ProcessError;
pub use staging::StagedFile;
pub use video::geometry::{classify, Geometry};
pub use video::optimize::{FfmpegOptimizer, StreamOptimizer};
pub use video::probe::{FfprobeInspector, GeometryInspector};
