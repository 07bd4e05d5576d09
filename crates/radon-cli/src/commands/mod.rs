//! CLI command implementations

pub mod rotate;
pub mod sweep;

use anyhow::{Context, Result};
use radon_core::Image;
use radon_ops::Filter;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Image> {
    radon_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    radon_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parse a `--filter` value.
pub fn parse_filter(name: &str) -> Result<Filter> {
    name.parse::<Filter>()
        .with_context(|| format!("Invalid filter: {}", name))
}
