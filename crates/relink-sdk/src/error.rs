//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// A collaborator required to build a runner was not supplied
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Snapshot could not be decoded
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Run plan error
    #[error("Run plan error: {0}")]
    ResolveError(#[from] relink_resolver::ResolveError),

    /// Resource tree error
    #[error("Resource tree error: {0}")]
    CoreError(#[from] relink_core::CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The run completed with errors and the runner was told to fail on them
    #[error("Run completed with {error_count} errors")]
    RunFailed { error_count: usize },
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
