//! # rastr-io
//!
//! Raster I/O: the plain-text PPM codec plus a boundary to conventional
//! compressed formats (PNG/JPEG/BMP) through the `image` crate.
//!
//! The `.ppm` extension selects the built-in text codec; every other
//! known extension routes to the conventional boundary. The top-level
//! [`read`] and [`write`] functions do that routing.
//!
//! # Example
//!
//! ```ignore
//! let raster = rastr_io::read("koala.ppm")?;
//! rastr_io::write("koala.png", &raster)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
pub mod conventional;
pub mod ppm;

use rastr_core::Raster;
use std::path::Path;
use tracing::debug;

pub use detect::Format;
pub use error::{IoError, IoResult};

/// Reads a raster, routing on the path's extension.
///
/// `.ppm` uses the text codec; everything else is handed to the
/// conventional decoder, which sniffs the actual content.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), ?format, "reading raster");
    match format {
        Format::Ppm => ppm::read(path),
        _ => conventional::read(path),
    }
}

/// Writes a raster, routing on the path's extension.
///
/// # Errors
///
/// [`IoError::UnrecognizedFormat`] when the extension maps to no codec;
/// there is no default output format.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), ?format, "writing raster");
    match format {
        Format::Ppm => ppm::write(path, raster),
        Format::Unknown => Err(IoError::UnrecognizedFormat(format!(
            "no codec for path {}",
            path.display()
        ))),
        _ => conventional::write(path, raster, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rastr_core::RasterView;
    use tempfile::tempdir;

    fn sample() -> Raster {
        let mut raster = Raster::new(2, 2).unwrap();
        raster.paint(0, 0, 0, 0, 0).unwrap();
        raster.paint(1, 0, 255, 255, 255).unwrap();
        raster.paint(0, 1, 100, 1, 254).unwrap();
        raster.paint(1, 1, 45, 23, 12).unwrap();
        raster
    }

    #[test]
    fn test_routes_ppm() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.ppm");

        let original = sample();
        write(&path, &original).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, original);

        // The file really is plain text
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("P3\n2 2\n255\n"));
    }

    #[test]
    fn test_routes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.png");

        let original = sample();
        write(&path, &original).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_unknown_write_extension_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.tga");
        assert!(matches!(
            write(&path, &sample()),
            Err(IoError::UnrecognizedFormat(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read("definitely/not/here.ppm");
        assert!(matches!(err, Err(IoError::Io(_))));
    }

    #[test]
    fn test_round_trip_preserves_every_channel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.ppm");
        let original = sample();
        write(&path, &original).unwrap();
        let loaded = read(&path).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(loaded.rgb(x, y).unwrap(), original.rgb(x, y).unwrap());
            }
        }
    }
}
