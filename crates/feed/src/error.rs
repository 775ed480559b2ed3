//! Error types for feed generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while serializing or writing a feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// Serialized output was not valid UTF-8
    #[error("Feed output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Failed to write the output file
    #[error("Failed to write feed to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the output directory
    #[error("Failed to create output directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// The destination path involved, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FeedError::Write { path, .. } | FeedError::DirectoryCreation { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}
