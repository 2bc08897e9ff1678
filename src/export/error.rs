use std::path::PathBuf;

use thiserror::Error;

use crate::discovery::error::{IncompatibleFamilyError, VersionParseError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provided path does not end with .json: {0}")]
    InvalidExtension(PathBuf),

    #[error("Invalid major version key: {0:?}")]
    InvalidMajor(String),

    #[error(transparent)]
    InvalidVersion(#[from] VersionParseError),

    #[error(transparent)]
    IncompatibleFamily(#[from] IncompatibleFamilyError),
}
