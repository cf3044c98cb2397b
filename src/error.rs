//! Error types for gallery synchronization

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a synchronization run
#[derive(Debug, Error)]
pub enum SyncError {
    /// The image directory does not exist
    #[error("image directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The image directory exists but could not be listed
    #[error("failed to read image directory {}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target file is absent or unreadable
    #[error("target file missing or unreadable: {}", .path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The updated content could not be written back
    #[error("failed to write target file {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The declaration pattern could not be compiled
    #[error("invalid declaration pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
