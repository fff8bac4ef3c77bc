//! Linear color-matrix transforms: per-pixel channel recombination.
//!
//! A 3x3 matrix `K` maps the source channels to
//! `newC_i = round(K[i][0]*r + K[i][1]*g + K[i][2]*b)` where row 0 produces
//! the new red value, row 1 the new green, row 2 the new blue.
//!
//! # Built-in matrices
//!
//! - [`red_grayscale`] / [`green_grayscale`] / [`blue_grayscale`] -
//!   replicate one source channel across all outputs
//! - [`intensity_grayscale`] - uniform 1/3 weights (rounded, unlike the
//!   truncating point-transform intensity)
//! - [`luma_grayscale`] - Rec.709 weights on every row
//! - [`sepia`] - the classic sepia tone matrix

use crate::kernel::Kernel;
use crate::point::{LUMA_B, LUMA_G, LUMA_R};
use crate::transform::{map_positions, Transformation};
use crate::{OpsError, OpsResult};
use rastr_core::{Raster, RasterView};

/// Applies a fixed 3x3 color matrix at every position of the source.
#[derive(Debug, Clone)]
pub struct MatrixTransform {
    kernel: Kernel,
}

impl MatrixTransform {
    /// Creates a color-matrix transform.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidKernel`] unless the kernel is exactly 3x3.
    pub fn new(kernel: Kernel) -> OpsResult<Self> {
        if kernel.side() != 3 {
            return Err(OpsError::InvalidKernel(format!(
                "color matrix must be 3x3, got {}x{}",
                kernel.side(),
                kernel.side()
            )));
        }
        Ok(Self { kernel })
    }

    fn row_dot(&self, row: usize, r: f64, g: f64, b: f64) -> i64 {
        (self.kernel.weight(row, 0) * r
            + self.kernel.weight(row, 1) * g
            + self.kernel.weight(row, 2) * b)
            .round() as i64
    }
}

impl Transformation for MatrixTransform {
    fn apply(&self, source: &dyn RasterView) -> OpsResult<Raster> {
        map_positions(source, |src, x, y| {
            let (r, g, b) = src.rgb(x, y)?;
            let (r, g, b) = (r as f64, g as f64, b as f64);
            Ok((
                self.row_dot(0, r, g, b),
                self.row_dot(1, r, g, b),
                self.row_dot(2, r, g, b),
            ))
        })
    }
}

/// Replicates the red channel across all three output channels.
pub fn red_grayscale() -> Kernel {
    Kernel::from_rows3([[1.0, 0.0, 0.0]; 3])
}

/// Replicates the green channel across all three output channels.
pub fn green_grayscale() -> Kernel {
    Kernel::from_rows3([[0.0, 1.0, 0.0]; 3])
}

/// Replicates the blue channel across all three output channels.
pub fn blue_grayscale() -> Kernel {
    Kernel::from_rows3([[0.0, 0.0, 1.0]; 3])
}

/// Uniform 1/3 weights; the rounded counterpart of the point-transform
/// intensity.
pub fn intensity_grayscale() -> Kernel {
    Kernel::from_rows3([[1.0 / 3.0; 3]; 3])
}

/// Rec.709 luma weights on every row.
pub fn luma_grayscale() -> Kernel {
    Kernel::from_rows3([[LUMA_R, LUMA_G, LUMA_B]; 3])
}

/// The sepia tone matrix.
pub fn sepia() -> Kernel {
    Kernel::from_rows3([
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(r: i32, g: i32, b: i32) -> Raster {
        let mut raster = Raster::new(1, 1).unwrap();
        raster.paint(0, 0, r, g, b).unwrap();
        raster
    }

    fn apply(kernel: Kernel, source: &Raster) -> (u8, u8, u8) {
        MatrixTransform::new(kernel)
            .unwrap()
            .apply(source)
            .unwrap()
            .rgb(0, 0)
            .unwrap()
    }

    #[test]
    fn test_rejects_non_3x3() {
        let kernel = Kernel::new(vec![0.0; 25], 5).unwrap();
        assert!(matches!(
            MatrixTransform::new(kernel),
            Err(OpsError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_channel_grayscales() {
        let src = single(10, 20, 30);
        assert_eq!(apply(red_grayscale(), &src), (10, 10, 10));
        assert_eq!(apply(green_grayscale(), &src), (20, 20, 20));
        assert_eq!(apply(blue_grayscale(), &src), (30, 30, 30));
    }

    #[test]
    fn test_intensity_rounds_where_point_truncates() {
        // (100 + 1 + 254) / 3 = 118.33.. -> 118 either way,
        // (50 + 50 + 51) / 3 = 50.33.. truncates to 50, rounds to 50;
        // (50 + 51 + 51) / 3 = 50.66.. truncates to 50 but rounds to 51.
        let src = single(50, 51, 51);
        assert_eq!(apply(intensity_grayscale(), &src), (51, 51, 51));
    }

    #[test]
    fn test_sepia_white_clamps() {
        // White pushes rows 0 and 1 past 255: 344.5, 306.8, 238.9
        let src = single(255, 255, 255);
        assert_eq!(apply(sepia(), &src), (255, 255, 239));
    }

    #[test]
    fn test_sepia_black_unchanged() {
        assert_eq!(apply(sepia(), &single(0, 0, 0)), (0, 0, 0));
    }
}
