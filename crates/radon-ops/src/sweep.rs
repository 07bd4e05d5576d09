//! Angle sweep: rotate at evenly spaced angles and build the sinogram.
//!
//! The sweep covers `[0, angle_max)` in steps of `angle_delta` degrees.
//! Every angle gets its own zeroed canvas; the canvas is handed to a
//! callback (the driver uses it to persist `rotated<angle>.png`), projected,
//! and folded into its own sinogram column.
//!
//! When the `parallel` feature is enabled, angles run on the rayon pool.
//! Workers own their canvases and only return projections; the sinogram is
//! written once all workers finish, one column per angle.
//!
//! # Example
//!
//! ```rust
//! use radon_core::Image;
//! use radon_ops::resample::Filter;
//! use radon_ops::sweep::{SweepConfig, sweep};
//!
//! let src = Image::filled(16, 16, 1, 128).unwrap();
//! let config = SweepConfig::new(360.0, 90.0).with_filter(Filter::Nearest);
//! let sinogram = sweep(&src, &config, |_, _, _| Ok(())).unwrap();
//! assert_eq!(sinogram.dimensions(), (4, 23));
//! ```

use crate::resample::Filter;
use crate::rotate::rotate_degrees;
use crate::sinogram::{Projection, allocate_sinogram, project, write_projection};
use crate::{OpsError, OpsResult};
use radon_core::Image;
use radon_io::{Codec, IoError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Relative tolerance when checking that `angle_max` is a multiple of
/// `angle_delta`.
const DIVISIBILITY_EPSILON: f64 = 1e-9;

/// Upper bound on the number of angles (sinogram columns) in one sweep.
pub const MAX_ANGLES: usize = u32::MAX as usize;

/// Default file name pattern for rotated frames.
pub const DEFAULT_ROTATED_PATTERN: &str = "rotated{angle}.png";

/// Default sinogram file name.
pub const DEFAULT_SINOGRAM_NAME: &str = "sinogram.png";

/// Angle range and resampling filter for a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Exclusive upper bound of the sweep, in degrees.
    pub angle_max: f64,
    /// Step between consecutive angles, in degrees.
    pub angle_delta: f64,
    /// Resampling filter used for every rotation.
    pub filter: Filter,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            angle_max: 360.0,
            angle_delta: 1.0,
            filter: Filter::default(),
        }
    }
}

impl SweepConfig {
    /// Sweep over `[0, angle_max)` in `angle_delta` steps with the default
    /// filter.
    pub fn new(angle_max: f64, angle_delta: f64) -> Self {
        Self {
            angle_max,
            angle_delta,
            ..Self::default()
        }
    }

    /// Sets the resampling filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Checks the configuration and returns the number of angles.
    ///
    /// # Errors
    ///
    /// [`OpsError::Configuration`] if either value is non-finite or not
    /// positive, if the angle count exceeds [`MAX_ANGLES`], or if
    /// `angle_max` is not an integer multiple of `angle_delta` (the sinogram
    /// column count would not line up with the sweep).
    pub fn validate(&self) -> OpsResult<usize> {
        let (max, delta) = (self.angle_max, self.angle_delta);
        if !max.is_finite() || !delta.is_finite() {
            return Err(OpsError::Configuration(format!(
                "angles must be finite (angle_max={}, angle_delta={})",
                max, delta
            )));
        }
        if delta <= 0.0 {
            return Err(OpsError::Configuration(format!(
                "angle_delta must be > 0, got {}",
                delta
            )));
        }
        if max <= 0.0 {
            return Err(OpsError::Configuration(format!(
                "angle_max must be > 0, got {}",
                max
            )));
        }

        let ratio = max / delta;
        if !ratio.is_finite() || ratio > MAX_ANGLES as f64 {
            return Err(OpsError::Configuration(format!(
                "angle_max {} / angle_delta {} gives more than {} angles",
                max, delta, MAX_ANGLES
            )));
        }

        let count = ratio.round();
        if count < 1.0 || (ratio - count).abs() > DIVISIBILITY_EPSILON * count {
            return Err(OpsError::Configuration(format!(
                "angle_max {} is not evenly divisible by angle_delta {}",
                max, delta
            )));
        }

        Ok(count as usize)
    }

    /// Angle of column `index`, in degrees.
    ///
    /// Rounded to 1e-9 so that e.g. `3 * 0.1` reads as `0.3` in file names.
    pub fn angle(&self, index: usize) -> f64 {
        (index as f64 * self.angle_delta * 1e9).round() / 1e9
    }

    /// Validates, then yields `(angle_index, angle_deg)` for every angle.
    pub fn angles(&self) -> OpsResult<impl Iterator<Item = (usize, f64)> + use<>> {
        let count = self.validate()?;
        let config = *self;
        Ok((0..count).map(move |i| (i, config.angle(i))))
    }
}

/// Rotates `src` at every angle of `config` and returns the sinogram.
///
/// `on_rotated(angle_index, angle_deg, canvas)` sees each rotated canvas
/// before it is projected and dropped; returning an error stops the sweep.
/// With the `parallel` feature it may be called from several threads at
/// once and in any order.
///
/// # Errors
///
/// - [`OpsError::Configuration`] from [`SweepConfig::validate`]
/// - [`OpsError::InvalidDimensions`] for a zero-sized source
/// - whatever `on_rotated` returns
pub fn sweep<F>(src: &Image, config: &SweepConfig, on_rotated: F) -> OpsResult<Image>
where
    F: Fn(usize, f64, &Image) -> OpsResult<()> + Sync,
{
    let num_angles = config.validate()?;
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "cannot sweep empty {}x{} image",
            src.width(),
            src.height()
        )));
    }

    let mut sinogram = allocate_sinogram(src.width(), src.height(), src.channels(), num_angles)?;
    debug!(
        num_angles,
        sinogram_width = sinogram.width(),
        sinogram_height = sinogram.height(),
        filter = %config.filter,
        "sweep start"
    );

    accumulate(&mut sinogram, src, config, &on_rotated)?;
    Ok(sinogram)
}

fn process_angle<F>(
    src: &Image,
    config: &SweepConfig,
    index: usize,
    angle: f64,
    on_rotated: &F,
) -> OpsResult<Projection>
where
    F: Fn(usize, f64, &Image) -> OpsResult<()>,
{
    let rotated = rotate_degrees(src, angle, config.filter)?;
    debug!(
        index,
        angle,
        width_rot = rotated.width(),
        height_rot = rotated.height(),
        "rotated"
    );
    on_rotated(index, angle, &rotated)?;
    Ok(project(&rotated))
}

#[cfg(not(feature = "parallel"))]
fn accumulate<F>(
    sinogram: &mut Image,
    src: &Image,
    config: &SweepConfig,
    on_rotated: &F,
) -> OpsResult<()>
where
    F: Fn(usize, f64, &Image) -> OpsResult<()> + Sync,
{
    for (index, angle) in config.angles()? {
        let projection = process_angle(src, config, index, angle, on_rotated)?;
        write_projection(sinogram, &projection, index)?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn accumulate<F>(
    sinogram: &mut Image,
    src: &Image,
    config: &SweepConfig,
    on_rotated: &F,
) -> OpsResult<()>
where
    F: Fn(usize, f64, &Image) -> OpsResult<()> + Sync,
{
    let angles: Vec<(usize, f64)> = config.angles()?.collect();
    let projections = angles
        .into_par_iter()
        .map(|(index, angle)| {
            process_angle(src, config, index, angle, on_rotated).map(|p| (index, p))
        })
        .collect::<OpsResult<Vec<_>>>()?;

    // Each index selects its own column, so write order does not matter.
    for (index, projection) in &projections {
        write_projection(sinogram, projection, *index)?;
    }
    Ok(())
}

/// Where a driver run writes its outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    /// Directory all outputs go to (created if missing).
    pub dir: PathBuf,
    /// File name pattern for rotated frames; `{angle}` is replaced by the
    /// angle in degrees. `None` skips writing frames.
    pub rotated_pattern: Option<String>,
    /// File name of the sinogram.
    pub sinogram_name: String,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            rotated_pattern: Some(DEFAULT_ROTATED_PATTERN.to_string()),
            sinogram_name: DEFAULT_SINOGRAM_NAME.to_string(),
        }
    }
}

impl OutputNaming {
    /// Default names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Path of the frame rotated by `angle_deg`, if frames are written.
    ///
    /// ```rust
    /// use radon_ops::sweep::OutputNaming;
    /// use std::path::Path;
    ///
    /// let naming = OutputNaming::in_dir("out");
    /// assert_eq!(naming.rotated_path(30.0).unwrap(), Path::new("out/rotated30.png"));
    /// assert_eq!(naming.rotated_path(22.5).unwrap(), Path::new("out/rotated22.5.png"));
    /// ```
    pub fn rotated_path(&self, angle_deg: f64) -> Option<PathBuf> {
        self.rotated_pattern
            .as_ref()
            .map(|pattern| self.dir.join(pattern.replace("{angle}", &angle_deg.to_string())))
    }

    /// Path of the sinogram.
    pub fn sinogram_path(&self) -> PathBuf {
        self.dir.join(&self.sinogram_name)
    }
}

/// What a driver run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    /// Source `(width, height)`.
    pub input_size: (usize, usize),
    /// Source channel count.
    pub channels: usize,
    /// Number of angles (sinogram columns).
    pub num_angles: usize,
    /// Sinogram `(width, height)`.
    pub sinogram_size: (usize, usize),
    /// Rotated frames written, in angle order.
    pub rotated_paths: Vec<PathBuf>,
    /// Sinogram written.
    pub sinogram_path: PathBuf,
}

/// Full driver run: decode `input`, sweep, persist every rotated frame and
/// the sinogram through `codec`.
///
/// The configuration is validated before anything is read. Decode and
/// encode failures abort the run.
pub fn run<C>(
    codec: &C,
    input: &Path,
    config: &SweepConfig,
    naming: &OutputNaming,
) -> OpsResult<SweepSummary>
where
    C: Codec + Sync,
{
    let num_angles = config.validate()?;

    let src = codec.decode(input)?;
    info!(
        input = %input.display(),
        width = src.width(),
        height = src.height(),
        channels = src.channels(),
        num_angles,
        "loaded source"
    );

    std::fs::create_dir_all(&naming.dir).map_err(IoError::from)?;

    let sinogram = sweep(&src, config, |_, angle, rotated| {
        if let Some(path) = naming.rotated_path(angle) {
            codec.encode(&path, rotated)?;
        }
        Ok(())
    })?;

    let sinogram_path = naming.sinogram_path();
    codec.encode(&sinogram_path, &sinogram)?;
    info!(
        path = %sinogram_path.display(),
        width = sinogram.width(),
        height = sinogram.height(),
        "wrote sinogram"
    );

    let rotated_paths = config
        .angles()?
        .filter_map(|(_, angle)| naming.rotated_path(angle))
        .collect();

    Ok(SweepSummary {
        input_size: src.dimensions(),
        channels: src.channels(),
        num_angles,
        sinogram_size: sinogram.dimensions(),
        rotated_paths,
        sinogram_path,
    })
}
