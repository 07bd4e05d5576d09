//! Error types for radon-core operations.
//!
//! The [`Error`] enum covers failures while constructing or addressing an
//! [`Image`](crate::Image) buffer. Sampling outside an image is *not* an
//! error anywhere in radon-rs; resamplers return black instead.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when the buffer length does not match `width * height *
    /// channels`, or when the size computation overflows.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Channel count outside `1..=4`, or a channel index the image lacks.
    #[error("invalid channel count {channels} (reason: {reason})")]
    InvalidChannelCount {
        /// Offending channel count or index
        channels: usize,
        /// Reason why the count is invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidChannelCount`] error.
    #[inline]
    pub fn invalid_channels(channels: usize, reason: impl Into<String>) -> Self {
        Self::InvalidChannelCount {
            channels,
            reason: reason.into(),
        }
    }
}
