//! Geometry inspection via an external probe process.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::ProcessError;
use crate::video::geometry::{classify, Geometry};
use crate::video::{validate_media_path, validate_tool_path};

/// Seam for probing a local file's geometry.
#[async_trait]
pub trait GeometryInspector: Send + Sync {
    async fn inspect(&self, path: &Path) -> Result<Geometry, ProcessError>;
}

/// ffprobe-backed inspector.
pub struct FfprobeInspector {
    ffprobe_path: String,
    deadline: Duration,
}

impl FfprobeInspector {
    pub fn new(ffprobe_path: String, deadline: Duration) -> Result<Self, ProcessError> {
        validate_tool_path(&ffprobe_path)?;
        Ok(Self {
            ffprobe_path,
            deadline,
        })
    }
}

#[async_trait]
impl GeometryInspector for FfprobeInspector {
    #[tracing::instrument(skip(self, path), fields(ffmpeg.operation = "probe"))]
    async fn inspect(&self, path: &Path) -> Result<Geometry, ProcessError> {
        validate_media_path(path)?;
        let start = std::time::Instant::now();

        let child = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "error",
                "-print_format",
                "json",
                "-show_streams",
                "-select_streams",
                "v:0",
            ])
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.deadline, child)
            .await
            .map_err(|_| ProcessError::TimedOut {
                tool: "ffprobe",
                secs: self.deadline.as_secs(),
            })?
            .map_err(|e| ProcessError::Spawn {
                tool: "ffprobe",
                source: e,
            })?;

        if !output.status.success() {
            return Err(ProcessError::Failed {
                tool: "ffprobe",
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let probe_data: serde_json::Value =
            serde_json::from_slice(&output.stdout).map_err(|e| ProcessError::Parse {
                tool: "ffprobe",
                message: e.to_string(),
            })?;

        let stream = probe_data["streams"]
            .get(0)
            .ok_or_else(|| ProcessError::Parse {
                tool: "ffprobe",
                message: "No video stream found".to_string(),
            })?;

        let width = stream["width"].as_u64().ok_or_else(|| ProcessError::Parse {
            tool: "ffprobe",
            message: "Could not parse width".to_string(),
        })? as u32;

        let height = stream["height"]
            .as_u64()
            .ok_or_else(|| ProcessError::Parse {
                tool: "ffprobe",
                message: "Could not parse height".to_string(),
            })? as u32;

        let geometry = classify(width, height);

        tracing::info!(
            width = width,
            height = height,
            geometry = %geometry,
            duration_ms = start.elapsed().as_millis() as u64,
            "Video probe completed"
        );

        Ok(geometry)
    }
}
