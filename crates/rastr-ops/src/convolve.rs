//! Convolution transforms: per-pixel weighted sums over a neighborhood.
//!
//! For an odd-sized kernel of half-width `h`, each output channel at
//! `(x, y)` is
//!
//! ```text
//! sum over dy in -h..=h, dx in -h..=h of
//!     K[dy + h][dx + h] * channel_at(x + dx, y + dy)
//! ```
//!
//! rounded to the nearest integer and clamped. Samples outside the raster
//! contribute 0 (zero-padding, not clamp-to-edge), which darkens borders;
//! a 3x3 1/9-weighted kernel on a 1x1 raster of (100, 100, 100) yields
//! (11, 11, 11). Changing the padding policy changes every border pixel.

use crate::kernel::Kernel;
use crate::transform::{map_positions, Transformation};
use crate::{OpsError, OpsResult};
use rastr_core::{Channel, Raster, RasterView};

/// Applies an odd-sized (>= 3x3) spatial kernel per channel.
#[derive(Debug, Clone)]
pub struct ConvolveTransform {
    kernel: Kernel,
}

impl ConvolveTransform {
    /// Creates a convolution transform.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidKernel`] unless the kernel side length is
    /// odd and at least 3.
    pub fn new(kernel: Kernel) -> OpsResult<Self> {
        let side = kernel.side();
        if side < 3 || side % 2 == 0 {
            return Err(OpsError::InvalidKernel(format!(
                "convolution kernel side must be odd and >= 3, got {side}"
            )));
        }
        Ok(Self { kernel })
    }

    fn convolve_channel(
        &self,
        source: &dyn RasterView,
        x: u32,
        y: u32,
        channel: Channel,
    ) -> OpsResult<i64> {
        let half = (self.kernel.side() / 2) as i64;
        let mut acc = 0.0f64;
        for dy in -half..=half {
            for dx in -half..=half {
                let weight = self
                    .kernel
                    .weight((dy + half) as usize, (dx + half) as usize);
                acc += weight * sample(source, x as i64 + dx, y as i64 + dy, channel)?;
            }
        }
        Ok(acc.round() as i64)
    }
}

impl Transformation for ConvolveTransform {
    fn apply(&self, source: &dyn RasterView) -> OpsResult<Raster> {
        map_positions(source, |src, x, y| {
            Ok((
                self.convolve_channel(src, x, y, Channel::Red)?,
                self.convolve_channel(src, x, y, Channel::Green)?,
                self.convolve_channel(src, x, y, Channel::Blue)?,
            ))
        })
    }
}

/// Reads one channel, treating anything outside the raster as 0.
fn sample(source: &dyn RasterView, x: i64, y: i64, channel: Channel) -> OpsResult<f64> {
    if x < 0 || y < 0 || x >= source.width() as i64 || y >= source.height() as i64 {
        return Ok(0.0);
    }
    Ok(f64::from(source.channel(x as u32, y as u32, channel)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_even_and_small_kernels() {
        for side in [1, 2, 4] {
            let kernel = Kernel::new(vec![0.0; side * side], side).unwrap();
            assert!(matches!(
                ConvolveTransform::new(kernel),
                Err(OpsError::InvalidKernel(_))
            ));
        }
    }

    #[test]
    fn test_zero_padded_border() {
        // Eight zero neighbors: 100/9 = 11.1 rounds to 11
        let mut source = Raster::new(1, 1).unwrap();
        source.paint(0, 0, 100, 100, 100).unwrap();

        let kernel = Kernel::new(vec![1.0 / 9.0; 9], 3).unwrap();
        let result = ConvolveTransform::new(kernel)
            .unwrap()
            .apply(&source)
            .unwrap();
        assert_eq!(result.rgb(0, 0).unwrap(), (11, 11, 11));
    }

    #[test]
    fn test_interior_average() {
        // 3x3 constant image: center pixel sees all nine neighbors
        let mut source = Raster::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                source.paint(x, y, 90, 90, 90).unwrap();
            }
        }

        let kernel = Kernel::new(vec![1.0 / 9.0; 9], 3).unwrap();
        let result = ConvolveTransform::new(kernel)
            .unwrap()
            .apply(&source)
            .unwrap();
        assert_eq!(result.rgb(1, 1).unwrap(), (90, 90, 90));
        // Corner sees four in-bounds samples: 4 * 90/9 = 40
        assert_eq!(result.rgb(0, 0).unwrap(), (40, 40, 40));
    }

    #[test]
    fn test_gaussian_blur_center_weight() {
        // Single bright pixel: output at the same position is 255/4 = 63.75
        let mut source = Raster::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                let v = if x == 1 && y == 1 { 255 } else { 0 };
                source.paint(x, y, v, v, v).unwrap();
            }
        }

        let result = ConvolveTransform::new(Kernel::gaussian_blur())
            .unwrap()
            .apply(&source)
            .unwrap();
        assert_eq!(result.rgb(1, 1).unwrap(), (64, 64, 64));
        // Direct neighbor gets 255/8 = 31.875
        assert_eq!(result.rgb(0, 1).unwrap(), (32, 32, 32));
        // Diagonal neighbor gets 255/16 = 15.9375
        assert_eq!(result.rgb(0, 0).unwrap(), (16, 16, 16));
    }

    #[test]
    fn test_sharpen_keeps_constant_interior_bright() {
        // 5x5 sharpen over a large constant field: weights sum to 1 in the
        // interior, so the center of a 7x7 image is unchanged.
        let mut source = Raster::new(7, 7).unwrap();
        for y in 0..7 {
            for x in 0..7 {
                source.paint(x, y, 120, 120, 120).unwrap();
            }
        }

        let result = ConvolveTransform::new(Kernel::sharpen())
            .unwrap()
            .apply(&source)
            .unwrap();
        assert_eq!(result.rgb(3, 3).unwrap(), (120, 120, 120));
    }
}
