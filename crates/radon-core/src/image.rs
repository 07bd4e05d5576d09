//! Interleaved 8-bit image buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, with channels
//! interleaved per pixel:
//!
//! ```text
//! Memory: [R G B A R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Channel `c` of pixel `(x, y)` lives at `C * (x + y * W) + c`.
//!
//! # Usage
//!
//! ```rust
//! use radon_core::{Channel, Image};
//!
//! let mut img = Image::zeroed(4, 3, 3).unwrap();
//! img.set(1, 2, Channel::Green, 200);
//! assert_eq!(img.get(1, 2, Channel::Green), 200);
//! assert_eq!(img.data().len(), 4 * 3 * 3);
//! ```

use crate::{Channel, Error, Result};

/// Largest supported interleaved channel count (RGBA).
pub const MAX_CHANNELS: usize = 4;

/// Owned raster of interleaved 8-bit samples.
///
/// The buffer is a single contiguous `Vec<u8>` of exactly
/// `width * height * channels` bytes. Accessors assert that coordinates are
/// in range; out-of-range sampling policy belongs to the resamplers, not to
/// the buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl Image {
    /// Allocates a black (all-zero) image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] unless `1 <= channels <= 4`,
    /// and [`Error::InvalidDimensions`] if the buffer size overflows.
    pub fn zeroed(width: usize, height: usize, channels: usize) -> Result<Self> {
        Self::filled(width, height, channels, 0)
    }

    /// Allocates an image with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Result<Self> {
        let len = buffer_len(width, height, channels)?;
        Ok(Self {
            data: vec![value; len],
            width,
            height,
            channels,
        })
    }

    /// Wraps an existing interleaved buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` does not equal
    /// `width * height * channels`.
    ///
    /// ```rust
    /// use radon_core::Image;
    ///
    /// let img = Image::from_raw(2, 2, 1, vec![10, 20, 30, 40]).unwrap();
    /// assert_eq!(img.pixel_count(), 4);
    /// assert!(Image::from_raw(2, 2, 1, vec![0; 3]).is_err());
    /// ```
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Interleaved channel count.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if `channel` is one of this image's planes.
    #[inline]
    pub fn has_channel(&self, channel: Channel) -> bool {
        channel.index() < self.channels
    }

    /// Channels present in this image, in interleave order.
    pub fn channel_iter(&self) -> impl Iterator<Item = Channel> + use<> {
        Channel::iter(self.channels)
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw interleaved bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Buffer offset of `channel` at flattened pixel index `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if `pixel >= width * height` or the image lacks `channel`.
    #[inline]
    pub fn offset_at(&self, pixel: usize, channel: Channel) -> usize {
        assert!(
            pixel < self.pixel_count(),
            "pixel index {} out of bounds for {}x{} image",
            pixel,
            self.width,
            self.height
        );
        assert!(
            self.has_channel(channel),
            "channel {} out of bounds for {}-channel image",
            channel,
            self.channels
        );
        self.channels * pixel + channel.index()
    }

    /// Buffer offset of `channel` at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image or the image lacks `channel`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, channel: Channel) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.offset_at(x + y * self.width, channel)
    }

    /// Reads one sample.
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: Channel) -> u8 {
        self.data[self.offset(x, y, channel)]
    }

    /// Writes one sample.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: Channel, value: u8) {
        let idx = self.offset(x, y, channel);
        self.data[idx] = value;
    }

    /// Writes one sample by flattened (row-major) pixel index.
    #[inline]
    pub fn set_at(&mut self, pixel: usize, channel: Channel, value: u8) {
        let idx = self.offset_at(pixel, channel);
        self.data[idx] = value;
    }

    /// Interleaved bytes of row `y`.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row {} out of bounds for height {}", y, self.height);
        let row_len = self.width * self.channels;
        &self.data[y * row_len..(y + 1) * row_len]
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("len", &self.data.len())
            .finish()
    }
}

fn buffer_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(Error::invalid_channels(
            channels,
            format!("must be between 1 and {}", MAX_CHANNELS),
        ));
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows usize"))
}
