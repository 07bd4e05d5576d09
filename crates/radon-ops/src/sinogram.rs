//! Row projection and sinogram accumulation.
//!
//! A sinogram has one column per rotation angle. Column `a` holds the
//! projection of the source rotated by `a * angle_delta`: for every canvas
//! row, the mean of that row's samples. Rotated canvases are usually shorter
//! than the sinogram (which is as tall as the source diagonal), so each
//! projection is centered vertically with
//! `row_offset = (sinogram_height - height_rot) / 2`.
//!
//! ```text
//!  angle:   0   1   2  ...  n-1
//!         +---+---+---+-----+---+
//!  row 0  |   |   | . |     |   |  <- zero border (outside the band)
//!   ...   | p | p | p |     | p |  <- projection band
//!  row H  |   |   | . |     |   |
//!         +---+---+---+-----+---+
//! ```
//!
//! Projection sums accumulate in `u64` and are divided by the canvas width
//! with integer truncation, which keeps every value within one byte.

use crate::geometry::sinogram_height;
use crate::{OpsError, OpsResult};
use radon_core::{Channel, Image};

/// Per-row means of one rotated canvas, for every channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    height: usize,
    channels: usize,
    /// Interleaved like a `1 x height` image: `values[row * channels + c]`.
    values: Vec<u8>,
}

impl Projection {
    /// Number of projected rows (the canvas height).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channel count.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `true` if nothing was projected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of `row` for `channel`.
    #[inline]
    pub fn get(&self, row: usize, channel: Channel) -> u8 {
        assert!(row < self.height, "projection row {} out of range", row);
        assert!(channel.index() < self.channels, "channel {} out of range", channel);
        self.values[row * self.channels + channel.index()]
    }
}

/// Allocates a zeroed sinogram for a `width x height` source swept over
/// `num_angles` angles.
///
/// The result is `num_angles` wide and [`sinogram_height`] tall, with
/// `channels` interleaved planes.
pub fn allocate_sinogram(
    width: usize,
    height: usize,
    channels: usize,
    num_angles: usize,
) -> OpsResult<Image> {
    Ok(Image::zeroed(num_angles, sinogram_height(width, height), channels)?)
}

/// Projects every row of `rotated` to its mean value, per channel.
///
/// The accumulator restarts at zero for every row. A zero-width canvas
/// projects to nothing.
pub fn project(rotated: &Image) -> Projection {
    let (width, height) = rotated.dimensions();
    let channels = rotated.channels();

    if width == 0 {
        return Projection {
            height: 0,
            channels,
            values: Vec::new(),
        };
    }

    let mut values = vec![0u8; height * channels];
    for r in 0..height {
        let row = rotated.row(r);
        for c in 0..channels {
            let mut projection: u64 = 0;
            for px in row.chunks_exact(channels) {
                projection += px[c] as u64;
            }
            values[r * channels + c] = (projection / width as u64) as u8;
        }
    }

    Projection {
        height,
        channels,
        values,
    }
}

/// Writes `projection` into column `angle_index` of `sinogram`, centered
/// vertically.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if `angle_index` is not a column
/// - [`OpsError::SizeMismatch`] if the channel counts differ or the
///   projection is taller than the sinogram
pub fn write_projection(
    sinogram: &mut Image,
    projection: &Projection,
    angle_index: usize,
) -> OpsResult<()> {
    let num_angles = sinogram.width();
    let sino_height = sinogram.height();

    if angle_index >= num_angles {
        return Err(OpsError::InvalidParameter(format!(
            "angle index {} out of range for {} angles",
            angle_index, num_angles
        )));
    }
    if projection.channels() != sinogram.channels() {
        return Err(OpsError::SizeMismatch(format!(
            "projection has {} channels, sinogram has {}",
            projection.channels(),
            sinogram.channels()
        )));
    }
    if projection.height() > sino_height {
        return Err(OpsError::SizeMismatch(format!(
            "projection height {} exceeds sinogram height {}",
            projection.height(),
            sino_height
        )));
    }

    let row_offset = (sino_height - projection.height()) / 2;
    for channel in sinogram.channel_iter() {
        for r in 0..projection.height() {
            sinogram.set(angle_index, r + row_offset, channel, projection.get(r, channel));
        }
    }

    Ok(())
}

/// Projects `rotated` and folds it into column `angle_index` of `sinogram`.
///
/// See [`project`] and [`write_projection`].
pub fn fill_sinogram(sinogram: &mut Image, rotated: &Image, angle_index: usize) -> OpsResult<()> {
    write_projection(sinogram, &project(rotated), angle_index)
}
