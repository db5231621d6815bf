//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Error type for note store and batch operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tiddler JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to {action} {path}: {source}")]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Wrap an I/O error with the path it concerned
    pub fn file(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            action,
            path: path.into(),
            source,
        }
    }

    /// Check if the error came from malformed input rather than the filesystem
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::FrontMatter(_))
    }
}
