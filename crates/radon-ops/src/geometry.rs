//! Rotation geometry: bounding boxes and inverse pixel mapping.
//!
//! # Conventions
//!
//! Pixel centers sit at integer coordinates, so the center of a
//! `width x height` pixel grid is `((width - 1) / 2, (height - 1) / 2)`.
//! Rotation happens about that point, using the matrix
//!
//! ```text
//! | cos θ  -sin θ |
//! | sin θ   cos θ |
//! ```
//!
//! The destination canvas *is* the source rotated by θ, so rotating a
//! destination-centered coordinate by the same matrix lands on the matching
//! source coordinate. Quarter turns are exact pixel permutations. No
//! rounding happens here; that is the resampler's job.
//!
//! # Example
//!
//! ```rust
//! use radon_ops::geometry::{map_to_source, rotated_bbox};
//!
//! // Identity: the canvas matches the source and pixels map onto themselves.
//! assert_eq!(rotated_bbox(4, 3, 0.0), (4, 3));
//! assert_eq!(map_to_source(5, 0.0, 4, 3, 4, 3), (1.0, 1.0));
//! ```

/// Trig values closer than this to 0 or ±1 snap to the exact value.
const SNAP_EPSILON: f64 = 1e-12;

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Cached `(sin θ, cos θ)` for one rotation angle.
///
/// Values within [`SNAP_EPSILON`] of 0 or ±1 are snapped, so quarter turns
/// map pixel centers exactly instead of landing a hair outside the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    sin: f64,
    cos: f64,
}

impl Rotation {
    /// Rotation by `angle_rad` radians.
    pub fn new(angle_rad: f64) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        Self {
            sin: snap(sin),
            cos: snap(cos),
        }
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        self.sin
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        self.cos
    }

    /// Rotates a centered point.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.cos - y * self.sin, x * self.sin + y * self.cos)
    }

    /// Canvas size needed to hold a `width x height` image after this
    /// rotation. See [`rotated_bbox`].
    pub fn bbox(&self, width: usize, height: usize) -> (usize, usize) {
        let hw = width as f64 / 2.0;
        let hh = height as f64 / 2.0;
        let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];

        let (mut max_x, mut max_y) = (0.0f64, 0.0f64);
        for (x, y) in corners {
            let (rx, ry) = self.apply(x, y);
            max_x = max_x.max(rx.abs());
            max_y = max_y.max(ry.abs());
        }

        ((2.0 * max_x).round() as usize, (2.0 * max_y).round() as usize)
    }
}

#[inline]
fn snap(v: f64) -> f64 {
    if v.abs() < SNAP_EPSILON {
        0.0
    } else if (v - 1.0).abs() < SNAP_EPSILON {
        1.0
    } else if (v + 1.0).abs() < SNAP_EPSILON {
        -1.0
    } else {
        v
    }
}

/// Size of the axis-aligned canvas that holds a rotated `width x height`
/// image without clipping.
///
/// The four corners are rotated about the image center; each output
/// dimension is twice the largest absolute rotated coordinate along that
/// axis, rounded to the nearest integer. Multiples of 360° return the input
/// size, odd multiples of 90° swap it.
///
/// ```rust
/// use radon_ops::geometry::{deg_to_rad, rotated_bbox};
///
/// assert_eq!(rotated_bbox(30, 20, deg_to_rad(90.0)), (20, 30));
/// assert_eq!(rotated_bbox(10, 10, deg_to_rad(45.0)), (14, 14));
/// ```
pub fn rotated_bbox(width: usize, height: usize, angle_rad: f64) -> (usize, usize) {
    Rotation::new(angle_rad).bbox(width, height)
}

/// Height of a sinogram for a `width x height` source: `ceil(sqrt(W² + H²))`.
///
/// This is the diagonal, which bounds the rotated canvas height at every
/// angle.
pub fn sinogram_height(width: usize, height: usize) -> usize {
    (width as f64).hypot(height as f64).ceil() as usize
}

/// Precomputed inverse mapping from one rotated canvas back to its source.
///
/// Build once per angle and call [`map`](Self::map) per destination pixel.
#[derive(Debug, Clone, Copy)]
pub struct InverseMap {
    rotation: Rotation,
    width_rot: usize,
    center_rot: (f64, f64),
    center: (f64, f64),
}

impl InverseMap {
    /// Mapping for a `width_rot x height_rot` canvas showing a
    /// `width x height` source rotated by `rotation`.
    pub fn new(
        rotation: Rotation,
        width_rot: usize,
        height_rot: usize,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            rotation,
            width_rot,
            center_rot: grid_center(width_rot, height_rot),
            center: grid_center(width, height),
        }
    }

    /// Maps a flattened (row-major) destination pixel index to a real-valued
    /// source coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the canvas has zero width.
    #[inline]
    pub fn map(&self, pixel_index: usize) -> (f64, f64) {
        assert!(self.width_rot > 0, "cannot map into a zero-width canvas");
        let col = (pixel_index % self.width_rot) as f64;
        let row = (pixel_index / self.width_rot) as f64;
        self.map_xy(col, row)
    }

    /// Maps a destination `(col, row)` to a real-valued source coordinate.
    #[inline]
    pub fn map_xy(&self, col: f64, row: f64) -> (f64, f64) {
        let (x, y) = self
            .rotation
            .apply(col - self.center_rot.0, row - self.center_rot.1);
        (x + self.center.0, y + self.center.1)
    }
}

#[inline]
fn grid_center(width: usize, height: usize) -> (f64, f64) {
    ((width as f64 - 1.0) / 2.0, (height as f64 - 1.0) / 2.0)
}

/// Maps destination pixel `pixel_index` of a `width_rot x height_rot` canvas
/// rotated by `angle_rad` to a coordinate in the `width x height` source.
///
/// Steps: recover `col`/`row` from the row-major index, subtract the canvas
/// grid center `((width_rot - 1) / 2, (height_rot - 1) / 2)`, rotate, then
/// add the source grid center `((width - 1) / 2, (height - 1) / 2)`. The
/// result is unrounded and may lie outside the source.
pub fn map_to_source(
    pixel_index: usize,
    angle_rad: f64,
    width_rot: usize,
    height_rot: usize,
    width: usize,
    height: usize,
) -> (f64, f64) {
    InverseMap::new(Rotation::new(angle_rad), width_rot, height_rot, width, height).map(pixel_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    #[test]
    fn test_bbox_identity_for_full_turns() {
        for turns in 0..4 {
            let angle = TAU * turns as f64;
            assert_eq!(rotated_bbox(7, 3, angle), (7, 3));
            assert_eq!(rotated_bbox(64, 48, angle), (64, 48));
            assert_eq!(rotated_bbox(1, 1, -angle), (1, 1));
        }
    }

    #[test]
    fn test_bbox_quarter_turns_swap() {
        assert_eq!(rotated_bbox(7, 3, FRAC_PI_2), (3, 7));
        assert_eq!(rotated_bbox(7, 3, PI), (7, 3));
        assert_eq!(rotated_bbox(7, 3, 3.0 * FRAC_PI_2), (3, 7));
        assert_eq!(rotated_bbox(7, 3, -FRAC_PI_2), (3, 7));
    }

    #[test]
    fn test_bbox_grows_at_45() {
        let (w, h) = rotated_bbox(100, 100, FRAC_PI_4);
        // 100 * sqrt(2) = 141.42
        assert_eq!((w, h), (141, 141));
        let (w, h) = rotated_bbox(2, 2, FRAC_PI_4);
        assert_eq!((w, h), (3, 3));
    }

    #[test]
    fn test_bbox_never_exceeds_sinogram_height() {
        for (w, h) in [(3, 4), (10, 1), (17, 9), (64, 64), (1, 1)] {
            let limit = sinogram_height(w, h);
            for deg in 0..360 {
                let (_, hr) = rotated_bbox(w, h, deg_to_rad(deg as f64));
                assert!(hr <= limit, "{}x{} at {}: {} > {}", w, h, deg, hr, limit);
            }
        }
    }

    #[test]
    fn test_sinogram_height() {
        assert_eq!(sinogram_height(3, 4), 5);
        assert_eq!(sinogram_height(10, 10), 15);
        assert_eq!(sinogram_height(1, 0), 1);
        assert_eq!(sinogram_height(0, 0), 0);
    }

    #[test]
    fn test_map_identity() {
        let (w, h) = (5, 4);
        for angle in [0.0, TAU, -TAU] {
            for idx in 0..w * h {
                let (x, y) = map_to_source(idx, angle, w, h, w, h);
                assert_relative_eq!(x, (idx % w) as f64, epsilon = 1e-9);
                assert_relative_eq!(y, (idx / w) as f64, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_map_quarter_turns_permute_pixels() {
        // 4x4 square: 90 -> (3 - row, col), 180 -> (3 - col, 3 - row),
        // 270 -> (row, 3 - col).
        for idx in 0..16 {
            let (col, row) = ((idx % 4) as f64, (idx / 4) as f64);
            assert_eq!(map_to_source(idx, FRAC_PI_2, 4, 4, 4, 4), (3.0 - row, col));
            assert_eq!(map_to_source(idx, PI, 4, 4, 4, 4), (3.0 - col, 3.0 - row));
            assert_eq!(map_to_source(idx, 3.0 * FRAC_PI_2, 4, 4, 4, 4), (row, 3.0 - col));
        }
    }

    #[test]
    fn test_map_quarter_turn_non_square_stays_inside() {
        // 6x4 source on a 4x6 canvas: every canvas pixel hits a source pixel.
        for idx in 0..24 {
            let (x, y) = map_to_source(idx, FRAC_PI_2, 4, 6, 6, 4);
            assert!((0.0..=5.0).contains(&x) && (0.0..=3.0).contains(&y), "{} -> ({}, {})", idx, x, y);
            assert_eq!((x.fract(), y.fract()), (0.0, 0.0));
        }
    }

    #[test]
    fn test_map_canvas_center_hits_source_center() {
        let angle = deg_to_rad(33.0);
        let (wr, hr) = rotated_bbox(40, 20, angle);
        let map = InverseMap::new(Rotation::new(angle), wr, hr, 40, 20);
        let (x, y) = map.map_xy((wr as f64 - 1.0) / 2.0, (hr as f64 - 1.0) / 2.0);
        assert_relative_eq!(x, 19.5, epsilon = 1e-9);
        assert_relative_eq!(y, 9.5, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_snaps() {
        let r = Rotation::new(deg_to_rad(90.0));
        assert_eq!(r.cos(), 0.0);
        assert_eq!(r.sin(), 1.0);
        let r = Rotation::new(deg_to_rad(180.0));
        assert_eq!((r.sin(), r.cos()), (0.0, -1.0));
        let r = Rotation::new(deg_to_rad(30.0));
        assert_relative_eq!(r.sin(), 0.5, epsilon = 1e-12);
    }
}
