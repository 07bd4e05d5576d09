//! Codec trait used by the sweep driver.
//!
//! The driver never touches files directly; it hands paths and buffers to a
//! [`Codec`]. [`PngCodec`](crate::PngCodec) is the stock implementation,
//! tests substitute in-memory codecs.

use crate::IoResult;
use radon_core::Image;
use std::path::Path;

/// Converts a file path to and from an [`Image`].
///
/// Both operations are all-or-nothing: they either fully succeed or return
/// an error.
///
/// # Example
///
/// ```rust,ignore
/// use radon_io::{Codec, PngCodec};
///
/// let codec = PngCodec::default();
/// let image = codec.decode("letters.png".as_ref())?;
/// codec.encode("copy.png".as_ref(), &image)?;
/// ```
pub trait Codec {
    /// Reads an image from `path`.
    fn decode(&self, path: &Path) -> IoResult<Image>;

    /// Writes `image` to `path`.
    fn encode(&self, path: &Path, image: &Image) -> IoResult<()>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn decode(&self, path: &Path) -> IoResult<Image> {
        (**self).decode(path)
    }

    fn encode(&self, path: &Path, image: &Image) -> IoResult<()> {
        (**self).encode(path, image)
    }
}
