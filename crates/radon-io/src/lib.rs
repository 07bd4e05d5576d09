//! # radon-io
//!
//! Image I/O for radon-rs.
//!
//! The rotation and sinogram pipeline treats file access as an external
//! collaborator: it converts a path to an interleaved 8-bit buffer plus
//! width/height/channel count and back. This crate supplies that
//! collaborator.
//!
//! # Architecture
//!
//! - [`Codec`] - Trait the sweep driver talks to
//! - [`PngCodec`] - Stock PNG implementation
//! - [`read`] / [`write`] - Free functions with format detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use radon_io::{read, write};
//!
//! let image = read("letters.png")?;
//! write("copy.png", &image)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod traits;

#[cfg(feature = "png")]
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::Codec;

use radon_core::Image;
use std::path::Path;

/// Reads an image from a file, detecting the format.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the format is not
/// supported, or the file is corrupted.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    match Format::detect(path)? {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[allow(unreachable_patterns)]
        _ => Err(unsupported(path)),
    }
}

/// Writes an image to a file, choosing the format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the extension names a
/// format radon-io cannot write.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[allow(unreachable_patterns)]
        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

/// [`Codec`] backed by [`read`] and [`write`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl Codec for PngCodec {
    fn decode(&self, path: &Path) -> IoResult<Image> {
        read(path)
    }

    fn encode(&self, path: &Path, image: &Image) -> IoResult<()> {
        write(path, image)
    }
}
