//! Error types for engine operations.

use rcam_models::CameraId;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving the camera engine.
///
/// Selection itself never fails; degenerate inputs produce `None`. These
/// errors cover geometry that is not ready yet and broken wiring at startup.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Track path has not been built")]
    PathNotBuilt,

    #[error("Degenerate track path: {0}")]
    DegeneratePath(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("Unknown camera: {0}")]
    UnknownCamera(CameraId),
}

impl EngineError {
    /// Create a degenerate path error.
    pub fn degenerate_path(message: impl Into<String>) -> Self {
        Self::DegeneratePath(message.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create a missing collaborator error.
    pub fn missing_collaborator(message: impl Into<String>) -> Self {
        Self::MissingCollaborator(message.into())
    }

    /// Whether the caller should simply skip the current tick.
    pub fn is_skip_tick(&self) -> bool {
        matches!(self, EngineError::PathNotBuilt)
    }
}
