//! Replay errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or running a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;
