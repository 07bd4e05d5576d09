//! Arbitrary-angle rotation by inverse mapping.
//!
//! For every pixel of the (usually larger) destination canvas, the source
//! coordinate is found with [`InverseMap`](crate::geometry::InverseMap) and
//! read through a [`Filter`]. Canvas pixels whose source coordinate falls
//! outside the image keep the background value (0).
//!
//! When the `parallel` feature is enabled, [`rotate`] processes canvas rows
//! with rayon. [`rotate_channel`] is always single-threaded.
//!
//! # Example
//!
//! ```rust
//! use radon_core::Image;
//! use radon_ops::resample::Filter;
//! use radon_ops::rotate::rotate_degrees;
//!
//! let src = Image::filled(64, 32, 3, 255).unwrap();
//! let rotated = rotate_degrees(&src, 90.0, Filter::Nearest).unwrap();
//! assert_eq!(rotated.dimensions(), (32, 64));
//! ```

use crate::geometry::{InverseMap, Rotation, deg_to_rad};
use crate::resample::Filter;
use crate::{OpsError, OpsResult};
use radon_core::{Channel, Image};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fills one channel of `dst` with `src` rotated by `angle_rad`.
///
/// `dst` defines the canvas (`width_rot x height_rot`); every destination
/// pixel index is mapped to the source and sampled with `filter`. `dst` must
/// be zeroed beforehand: samples that fall outside the source are written as
/// 0, but nothing else clears the buffer. Call once per channel to populate
/// all interleaved planes.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`] if the channel counts differ,
/// [`OpsError::InvalidParameter`] if `channel` is not present.
pub fn rotate_channel(
    dst: &mut Image,
    src: &Image,
    angle_rad: f64,
    filter: Filter,
    channel: Channel,
) -> OpsResult<()> {
    check_channels(dst, src, channel)?;

    let map = inverse_map(dst, src, angle_rad);
    for idx in 0..dst.pixel_count() {
        let (x, y) = map.map(idx);
        dst.set_at(idx, channel, filter.sample(src, x, y, channel));
    }

    Ok(())
}

/// Rotates `src` by `angle_rad` onto a freshly allocated canvas sized by
/// [`rotated_bbox`](crate::geometry::rotated_bbox).
///
/// # Errors
///
/// [`OpsError::InvalidDimensions`] for a zero-sized source.
pub fn rotate(src: &Image, angle_rad: f64, filter: Filter) -> OpsResult<Image> {
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "cannot rotate empty {}x{} image",
            src.width(),
            src.height()
        )));
    }

    let (width_rot, height_rot) = Rotation::new(angle_rad).bbox(src.width(), src.height());
    let mut dst = Image::zeroed(width_rot, height_rot, src.channels())?;

    trace!(
        angle_rad,
        width = src.width(),
        height = src.height(),
        width_rot,
        height_rot,
        %filter,
        "rotate"
    );

    fill_canvas(&mut dst, src, angle_rad, filter)?;
    Ok(dst)
}

/// Same as [`rotate`], with the angle in degrees.
pub fn rotate_degrees(src: &Image, angle_deg: f64, filter: Filter) -> OpsResult<Image> {
    rotate(src, deg_to_rad(angle_deg), filter)
}

fn check_channels(dst: &Image, src: &Image, channel: Channel) -> OpsResult<()> {
    if dst.channels() != src.channels() {
        return Err(OpsError::SizeMismatch(format!(
            "destination has {} channels, source has {}",
            dst.channels(),
            src.channels()
        )));
    }
    if !src.has_channel(channel) {
        return Err(OpsError::InvalidParameter(format!(
            "channel {} not present in {}-channel image",
            channel,
            src.channels()
        )));
    }
    Ok(())
}

#[inline]
fn inverse_map(dst: &Image, src: &Image, angle_rad: f64) -> InverseMap {
    InverseMap::new(
        Rotation::new(angle_rad),
        dst.width(),
        dst.height(),
        src.width(),
        src.height(),
    )
}

/// Fills every channel of the canvas, one pass per channel.
#[cfg(not(feature = "parallel"))]
fn fill_canvas(dst: &mut Image, src: &Image, angle_rad: f64, filter: Filter) -> OpsResult<()> {
    for channel in src.channel_iter() {
        rotate_channel(dst, src, angle_rad, filter, channel)?;
    }
    Ok(())
}

/// Fills every channel of the canvas, rows in parallel.
///
/// Each row chunk is owned by one worker and each channel writes its own
/// interleave offset, so the output matches the per-channel passes exactly.
#[cfg(feature = "parallel")]
fn fill_canvas(dst: &mut Image, src: &Image, angle_rad: f64, filter: Filter) -> OpsResult<()> {
    let map = inverse_map(dst, src, angle_rad);
    let channels = dst.channels();
    let row_len = dst.width() * channels;
    if row_len == 0 {
        return Ok(());
    }

    dst.data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, out)| {
            for (col, px) in out.chunks_exact_mut(channels).enumerate() {
                let (x, y) = map.map_xy(col as f64, row as f64);
                for channel in Channel::iter(channels) {
                    px[channel.index()] = filter.sample(src, x, y, channel);
                }
            }
        });

    Ok(())
}
