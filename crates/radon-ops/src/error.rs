//! Error types for image operations.

use thiserror::Error;

/// Error type for rotation, projection and sweep operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified (e.g. a zero-sized source).
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Images have incompatible sizes or channel counts.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sweep configuration is inconsistent (e.g. `angle_max` not a multiple
    /// of `angle_delta`).
    #[error("inconsistent configuration: {0}")]
    Configuration(String),

    /// Codec failure while loading or persisting an image.
    #[error(transparent)]
    Io(#[from] radon_io::IoError),

    /// Buffer construction failure.
    #[error(transparent)]
    Core(#[from] radon_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
