//! # radon-core
//!
//! Core types shared by every radon-rs crate.
//!
//! - [`Image`] - Owned, interleaved 8-bit raster with bounds-checked accessors
//! - [`Channel`] - Selector for one interleaved plane (R, G, B, A)
//! - [`Error`] - Buffer construction and access errors
//!
//! ## Crate Structure
//!
//! ```text
//! radon-core (this crate)
//!    ^
//!    |
//!    +-- radon-io (PNG codec)
//!    +-- radon-ops (geometry, resampling, rotation, sinogram)
//!    +-- radon-cli (the `radon` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod image;

pub use channel::Channel;
pub use error::{Error, Result};
pub use image::{Image, MAX_CHANNELS};
