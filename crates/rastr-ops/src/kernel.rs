//! Square weight matrices for matrix and convolution transforms.
//!
//! A [`Kernel`] is an immutable square grid of `f64` weights. The same type
//! backs both uses: fixed 3x3 color matrices (validated by
//! [`MatrixTransform::new`](crate::matrix::MatrixTransform::new)) and
//! odd-sized spatial kernels (validated by
//! [`ConvolveTransform::new`](crate::convolve::ConvolveTransform::new)).

use crate::{OpsError, OpsResult};

/// Immutable square matrix of real-valued weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    data: Vec<f64>,
    side: usize,
}

impl Kernel {
    /// Creates a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidKernel`] when `side` is zero or
    /// `data.len()` is not `side * side`.
    pub fn new(data: Vec<f64>, side: usize) -> OpsResult<Self> {
        if side == 0 {
            return Err(OpsError::InvalidKernel("side must be at least 1".into()));
        }
        if data.len() != side * side {
            return Err(OpsError::InvalidKernel(format!(
                "data size {} doesn't match {}x{}",
                data.len(),
                side,
                side
            )));
        }
        Ok(Self { data, side })
    }

    /// Side length of the kernel.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Weight at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the kernel.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.side && col < self.side);
        self.data[row * self.side + col]
    }

    /// Builds a 3x3 kernel from rows; used by the built-in color matrices.
    pub(crate) fn from_rows3(rows: [[f64; 3]; 3]) -> Self {
        Self {
            data: rows.into_iter().flatten().collect(),
            side: 3,
        }
    }

    /// The 3x3 Gaussian blur kernel.
    ///
    /// ```text
    /// 1/16  1/8  1/16
    ///  1/8  1/4   1/8
    /// 1/16  1/8  1/16
    /// ```
    pub fn gaussian_blur() -> Self {
        Self {
            data: vec![
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
                1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0,
                1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
            ],
            side: 3,
        }
    }

    /// The 5x5 sharpening kernel: -1/8 outer band, 1/4 inner ring,
    /// 1.0 center.
    pub fn sharpen() -> Self {
        Self {
            data: vec![
                -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0,
                -1.0 / 8.0, 1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0, -1.0 / 8.0,
                -1.0 / 8.0, 1.0 / 4.0, 1.0, 1.0 / 4.0, -1.0 / 8.0,
                -1.0 / 8.0, 1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0, -1.0 / 8.0,
                -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0,
            ],
            side: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_validates_size() {
        assert!(Kernel::new(vec![0.0; 9], 3).is_ok());
        assert!(matches!(
            Kernel::new(vec![0.0; 8], 3),
            Err(OpsError::InvalidKernel(_))
        ));
        assert!(matches!(
            Kernel::new(vec![], 0),
            Err(OpsError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_gaussian_blur_weights() {
        let k = Kernel::gaussian_blur();
        assert_eq!(k.side(), 3);
        assert_relative_eq!(k.weight(1, 1), 0.25);
        assert_relative_eq!(k.weight(0, 0), 1.0 / 16.0);

        // Weights sum to 1, so a constant image is unchanged
        let sum: f64 = (0..3).flat_map(|r| (0..3).map(move |c| (r, c)))
            .map(|(r, c)| k.weight(r, c))
            .sum();
        assert_relative_eq!(sum, 1.0);
    }

    #[test]
    fn test_sharpen_weights() {
        let k = Kernel::sharpen();
        assert_eq!(k.side(), 5);
        assert_relative_eq!(k.weight(2, 2), 1.0);
        assert_relative_eq!(k.weight(1, 1), 0.25);
        assert_relative_eq!(k.weight(0, 4), -0.125);
    }
}
