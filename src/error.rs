use thiserror::Error;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EnvFilesError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid permission mode: {0}")]
    InvalidMode(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvFilesError {
    /// Classify an IO error raised while touching `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => EnvFilesError::NotFound(path.into()),
            std::io::ErrorKind::PermissionDenied => EnvFilesError::PermissionDenied(path.into()),
            _ => EnvFilesError::Io(err),
        }
    }
}
