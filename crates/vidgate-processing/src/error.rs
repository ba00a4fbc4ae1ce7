//! Errors from external media tools.

use thiserror::Error;

/// Failure of an external probe or remux invocation.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to spawn {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with failure: {stderr}")]
    Failed { tool: &'static str, stderr: String },

    #[error("{tool} did not finish within {secs}s")]
    TimedOut { tool: &'static str, secs: u64 },

    #[error("Failed to parse {tool} output: {message}")]
    Parse {
        tool: &'static str,
        message: String,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
