//! Error types for the assistant swap pipeline.
//!
//! Only file access can fail. Stripping and insertion work on an in-memory
//! buffer and never return an error.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type SwapResult<T> = Result<T, SwapError>;

#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// Input is missing, unreadable, or not valid UTF-8.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output location is not writable.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SwapError {
    /// Path of the file the failed operation touched.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
