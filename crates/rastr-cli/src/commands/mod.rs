//! CLI command implementations

pub mod apply;
pub mod info;
pub mod run;

use anyhow::{Context, Result};
use rastr_core::Raster;
use std::path::Path;

/// Load a raster from path, routing on extension.
pub fn load_image(path: &Path) -> Result<Raster> {
    rastr_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a raster to path, routing on extension.
pub fn save_image(path: &Path, raster: &Raster) -> Result<()> {
    rastr_io::write(path, raster).with_context(|| format!("Failed to save: {}", path.display()))
}
