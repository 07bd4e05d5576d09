//! # radon-ops
//!
//! Arbitrary-angle rotation and sinogram accumulation.
//!
//! A sweep rotates one source image at evenly spaced angles. Every rotated
//! canvas is collapsed to a column of per-row means, and the columns side by
//! side form the sinogram (a discrete Radon transform).
//!
//! # Modules
//!
//! - [`geometry`] - Bounding boxes and inverse pixel mapping
//! - [`resample`] - Nearest and bilinear point sampling
//! - [`rotate`] - Rotation onto a fresh canvas
//! - [`sinogram`] - Row projection and column placement
//! - [`sweep`] - Angle iteration and the file-level driver
//!
//! # Example
//!
//! ```rust
//! use radon_core::Image;
//! use radon_ops::{Filter, SweepConfig, sweep};
//!
//! let src = Image::filled(8, 6, 3, 40).unwrap();
//! let config = SweepConfig::new(180.0, 45.0).with_filter(Filter::Bilinear);
//! let sinogram = sweep(&src, &config, |_, _, _| Ok(())).unwrap();
//! assert_eq!(sinogram.dimensions(), (4, 10));
//! ```
//!
//! ## Driver
//!
//! ```rust,ignore
//! use radon_io::PngCodec;
//! use radon_ops::{OutputNaming, SweepConfig, run};
//!
//! let summary = run(&PngCodec, "letters.png".as_ref(), &SweepConfig::default(), &OutputNaming::in_dir("out"))?;
//! println!("sinogram: {}", summary.sinogram_path.display());
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Rotate canvas rows and sweep angles on the rayon pool
//!   (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod geometry;
pub mod resample;
pub mod rotate;
pub mod sinogram;
pub mod sweep;

pub use error::{OpsError, OpsResult};
pub use geometry::{deg_to_rad, map_to_source, rotated_bbox, sinogram_height};
pub use resample::Filter;
pub use rotate::{rotate, rotate_channel, rotate_degrees};
pub use sinogram::{Projection, allocate_sinogram, fill_sinogram, project, write_projection};
pub use sweep::{OutputNaming, SweepConfig, SweepSummary, run, sweep};
