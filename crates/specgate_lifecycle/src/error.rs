//! Error types for the lifecycle crate.

use thiserror::Error;

/// Result type alias for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Errors that can occur while assessing lifecycle state.
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Unknown workflow: '{0}' is not declared by the library")]
    UnknownWorkflow(String),
}
