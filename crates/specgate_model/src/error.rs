//! Error types for the model crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while loading or validating a spec document.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Spec document not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported spec format for file: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid spec document: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
