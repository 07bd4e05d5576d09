//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
///
/// Decode and encode failures are fatal for a sweep: there is no retry
/// path, so callers simply propagate them.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error (unreadable or corrupt source).
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color type.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoded buffer could not be wrapped as an image.
    #[error(transparent)]
    Core(#[from] radon_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
