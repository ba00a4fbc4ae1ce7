//! Video processing module

pub mod geometry;
pub mod optimize;
pub mod probe;

use crate::error::ProcessError;
use std::path::Path;

/// Validate that a path doesn't contain shell metacharacters or traversal sequences.
pub(crate) fn validate_tool_path(path: &str) -> Result<(), ProcessError> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(ProcessError::InvalidPath(format!(
            "Path contains dangerous characters: {}",
            path
        )));
    }

    if path.contains("..") {
        return Err(ProcessError::InvalidPath(format!(
            "Path contains directory traversal: {}",
            path
        )));
    }

    Ok(())
}

pub(crate) fn validate_media_path(path: &Path) -> Result<(), ProcessError> {
    validate_tool_path(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_shell_metacharacters() {
        assert!(validate_tool_path("/usr/bin/ffprobe; rm -rf /").is_err());
        assert!(validate_tool_path("$(evil)").is_err());
    }

    #[test]
    fn rejects_traversal() {
        assert!(validate_tool_path("../../bin/sh").is_err());
    }

    #[test]
    fn accepts_plain_paths() {
        assert!(validate_tool_path("/usr/bin/ffprobe").is_ok());
        assert!(validate_tool_path("ffmpeg").is_ok());
    }
}
