//! Conventional compressed formats (PNG/JPEG/BMP) via the `image` crate.
//!
//! The core never reimplements compressed codecs; this module is the
//! `decode(bytes) -> Raster` / `encode(&Raster) -> bytes` boundary around
//! the external library. Alpha channels and non-RGB color types are
//! flattened to 8-bit RGB on the way in.

use crate::{Format, IoError, IoResult};
use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage};
use rastr_core::{Raster, RasterView};
use std::io::Cursor;
use std::path::Path;

/// Decodes a compressed raster from memory, sniffing the format.
pub fn decode(bytes: &[u8]) -> IoResult<Raster> {
    let img = image::load_from_memory(bytes).map_err(|e| IoError::Decode(e.to_string()))?;
    dynamic_to_raster(img)
}

/// Encodes a raster into the given compressed format.
///
/// # Errors
///
/// `UnpaintedPosition` (propagated from the raster) if any cell was never
/// painted; [`IoError::UnrecognizedFormat`] if `format` has no conventional
/// encoder.
pub fn encode(raster: &Raster, format: Format) -> IoResult<Vec<u8>> {
    let image_format = image_format(format)?;
    let rgb = raster_to_rgb(raster)?;

    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut bytes, image_format)
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(bytes.into_inner())
}

/// Reads a conventional raster file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let img = ImageReader::open(path.as_ref())?
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;
    dynamic_to_raster(img)
}

/// Writes a raster to a conventional format file.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster, format: Format) -> IoResult<()> {
    let bytes = encode(raster, format)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn image_format(format: Format) -> IoResult<ImageFormat> {
    match format {
        Format::Png => Ok(ImageFormat::Png),
        Format::Jpeg => Ok(ImageFormat::Jpeg),
        Format::Bmp => Ok(ImageFormat::Bmp),
        Format::Ppm | Format::Unknown => Err(IoError::UnrecognizedFormat(format!(
            "no conventional encoder for {format:?}"
        ))),
    }
}

fn dynamic_to_raster(img: DynamicImage) -> IoResult<Raster> {
    let rgb = img.to_rgb8();
    let mut raster = Raster::new(rgb.width(), rgb.height())?;
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let Rgb([r, g, b]) = *pixel;
        raster.paint(x, y, i32::from(r), i32::from(g), i32::from(b))?;
    }
    Ok(raster)
}

fn raster_to_rgb(raster: &Raster) -> IoResult<RgbImage> {
    let mut out = RgbImage::new(raster.width(), raster.height());
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let (r, g, b) = raster.rgb(x, y)?;
            out.put_pixel(x, y, Rgb([r, g, b]));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Raster {
        let mut raster = Raster::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                raster
                    .paint(x, y, (x * 40 % 256) as i32, (y * 60 % 256) as i32, 200)
                    .unwrap();
            }
        }
        raster
    }

    #[test]
    fn test_png_round_trip_lossless() {
        let original = gradient(5, 4);
        let bytes = encode(&original, Format::Png).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_bmp_round_trip_lossless() {
        let original = gradient(3, 3);
        let bytes = encode(&original, Format::Bmp).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_jpeg_preserves_dimensions() {
        let original = gradient(8, 6);
        let bytes = encode(&original, Format::Jpeg).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 6);
    }

    #[test]
    fn test_encode_rejects_unpainted() {
        let raster = Raster::new(2, 2).unwrap();
        assert!(matches!(
            encode(&raster, Format::Png),
            Err(IoError::Image(rastr_core::Error::UnpaintedPosition { .. }))
        ));
    }

    #[test]
    fn test_encode_rejects_ppm_format() {
        let raster = gradient(1, 1);
        assert!(matches!(
            encode(&raster, Format::Ppm),
            Err(IoError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode(&[0u8; 16]),
            Err(IoError::Decode(_))
        ));
    }
}
