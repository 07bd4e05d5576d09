//! Point sampling at fractional coordinates.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - Rounds to the closest pixel (blocky, exact values)
//! - [`Filter::Bilinear`] - Blends the four surrounding pixels (smooth)
//!
//! Both filters share one boundary rule: a coordinate with `x < 0`, `y < 0`,
//! `x > width - 1` or `y > height - 1` samples as background (0). Falling
//! outside the source is the normal case for the corners of a rotated
//! canvas, not an error.
//!
//! # Example
//!
//! ```rust
//! use radon_core::{Channel, Image};
//! use radon_ops::resample::Filter;
//!
//! let img = Image::from_raw(2, 1, 1, vec![0, 100]).unwrap();
//! assert_eq!(Filter::Bilinear.sample(&img, 0.5, 0.0, Channel::Red), 50);
//! assert_eq!(Filter::Nearest.sample(&img, 0.4, 0.0, Channel::Red), 0);
//! assert_eq!(Filter::Nearest.sample(&img, -0.1, 0.0, Channel::Red), 0);
//! ```

use crate::{OpsError, OpsResult};
use radon_core::{Channel, Image};
use std::fmt;
use std::str::FromStr;

/// Resampling filter for rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, fast).
    #[default]
    Bilinear,
}

impl Filter {
    /// Samples `channel` of `src` at `(x, y)`.
    ///
    /// Pure and read-only, so it can be called from any number of threads.
    #[inline]
    pub fn sample(self, src: &Image, x: f64, y: f64, channel: Channel) -> u8 {
        match self {
            Filter::Nearest => nearest(src, x, y, channel),
            Filter::Bilinear => bilinear(src, x, y, channel),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Filter::Nearest => "nearest",
            Filter::Bilinear => "bilinear",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_lowercase().as_str() {
            "nearest" | "nn" | "point" => Ok(Filter::Nearest),
            "bilinear" | "linear" | "triangle" => Ok(Filter::Bilinear),
            _ => Err(OpsError::InvalidParameter(format!(
                "unknown filter '{}'. Valid: nearest, bilinear",
                s
            ))),
        }
    }
}

/// Returns `true` if `(x, y)` lies inside `[0, width-1] x [0, height-1]`.
#[inline]
fn in_bounds(src: &Image, x: f64, y: f64) -> bool {
    let max_x = src.width() as f64 - 1.0;
    let max_y = src.height() as f64 - 1.0;
    x.is_finite() && y.is_finite() && x >= 0.0 && y >= 0.0 && x <= max_x && y <= max_y
}

/// Nearest-neighbor sample.
///
/// The rounded index is clamped to the last row/column as well, so a
/// coordinate that passes the bounds check can never round past the edge.
#[inline]
fn nearest(src: &Image, x: f64, y: f64, channel: Channel) -> u8 {
    if !in_bounds(src, x, y) {
        return 0;
    }
    let xi = (x.round() as usize).min(src.width() - 1);
    let yi = (y.round() as usize).min(src.height() - 1);
    src.get(xi, yi, channel)
}

/// Bilinear sample.
///
/// Integral coordinates make `floor == ceil`, so the blend collapses to an
/// exact read.
#[inline]
fn bilinear(src: &Image, x: f64, y: f64, channel: Channel) -> u8 {
    if !in_bounds(src, x, y) {
        return 0;
    }

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let (x0, x1) = (x0 as usize, x.ceil() as usize);
    let (y0, y1) = (y0 as usize, y.ceil() as usize);

    let p00 = src.get(x0, y0, channel) as f64;
    let p10 = src.get(x1, y0, channel) as f64;
    let p01 = src.get(x0, y1, channel) as f64;
    let p11 = src.get(x1, y1, channel) as f64;

    let top = p00 + (p10 - p00) * fx;
    let bot = p01 + (p11 - p01) * fx;
    let value = top + (bot - top) * fy;

    value.round().clamp(0.0, 255.0) as u8
}
