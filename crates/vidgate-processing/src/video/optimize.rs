//! Stream-layout optimization via an external remux process.
//!
//! The remux copies codecs bit-for-bit and relocates container metadata to the
//! front so a client can begin playback before the full payload is fetched.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::ProcessError;
use crate::video::{validate_media_path, validate_tool_path};

/// Seam for rewriting a local file into a streaming-optimized layout.
///
/// Returns the path of the new file; the caller owns deletion of both the
/// input and the output.
#[async_trait]
pub trait StreamOptimizer: Send + Sync {
    async fn optimize(&self, path: &Path) -> Result<PathBuf, ProcessError>;
}

/// ffmpeg-backed optimizer. Output lands at `{input}.processed`.
pub struct FfmpegOptimizer {
    ffmpeg_path: String,
    deadline: Duration,
}

impl FfmpegOptimizer {
    pub fn new(ffmpeg_path: String, deadline: Duration) -> Result<Self, ProcessError> {
        validate_tool_path(&ffmpeg_path)?;
        Ok(Self {
            ffmpeg_path,
            deadline,
        })
    }
}

fn processed_path(input: &Path) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(".processed");
    PathBuf::from(os)
}

#[async_trait]
impl StreamOptimizer for FfmpegOptimizer {
    #[tracing::instrument(skip(self, path), fields(ffmpeg.operation = "faststart"))]
    async fn optimize(&self, path: &Path) -> Result<PathBuf, ProcessError> {
        validate_media_path(path)?;
        let output_path = processed_path(path);
        let start = std::time::Instant::now();

        let child = Command::new(&self.ffmpeg_path)
            .arg("-y")
            .arg("-i")
            .arg(path)
            .args([
                "-c",
                "copy",
                "-map_metadata",
                "0",
                "-movflags",
                "+faststart",
                // Output has a `.processed` suffix, so the container must be explicit.
                "-f",
                "mp4",
            ])
            .arg(&output_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.deadline, child)
            .await
            .map_err(|_| ProcessError::TimedOut {
                tool: "ffmpeg",
                secs: self.deadline.as_secs(),
            })?
            .map_err(|e| ProcessError::Spawn {
                tool: "ffmpeg",
                source: e,
            })?;

        if !output.status.success() {
            // A failed run can leave a partial output behind.
            let _ = std::fs::remove_file(&output_path);
            return Err(ProcessError::Failed {
                tool: "ffmpeg",
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        tracing::info!(
            output = %output_path.display(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Stream optimization completed"
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_path_appends_suffix() {
        assert_eq!(
            processed_path(Path::new("/tmp/abc.mp4")),
            PathBuf::from("/tmp/abc.mp4.processed")
        );
    }

    #[test]
    fn rejects_unsafe_tool_path() {
        assert!(FfmpegOptimizer::new("ffmpeg|cat".to_string(), Duration::from_secs(5)).is_err());
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let optimizer = FfmpegOptimizer::new(
            "/nonexistent/ffmpeg-for-tests".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        let err = optimizer.optimize(Path::new("/tmp/whatever.mp4")).await;
        assert!(matches!(err, Err(ProcessError::Spawn { .. })));
    }
}
