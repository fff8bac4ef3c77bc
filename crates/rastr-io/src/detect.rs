//! Format detection from file extensions.

use std::path::Path;

/// Raster formats the workspace can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain-text PPM (P3), handled by the built-in codec.
    Ppm,
    /// PNG, delegated to the `image` crate.
    Png,
    /// JPEG, delegated to the `image` crate.
    Jpeg,
    /// BMP, delegated to the `image` crate.
    Bmp,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from the file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("ppm") => Format::Ppm,
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            Some("bmp") => Format::Bmp,
            _ => Format::Unknown,
        }
    }
}
