//! Point transforms: per-pixel functions of that pixel's own channels.
//!
//! # Formulas
//!
//! | op | newR, newG, newB |
//! |---|---|
//! | `Red` / `Green` / `Blue` | the chosen channel, replicated |
//! | `Value` | `max(r, g, b)` |
//! | `Intensity` | `(r + g + b) / 3`, truncating |
//! | `Luma` | `round(0.2126 r + 0.7152 g + 0.0722 b)` |
//! | `Brighten(delta)` | `r + delta, g + delta, b + delta` |
//!
//! `Intensity` deliberately truncates while the matrix-based intensity
//! grayscale rounds; the two are distinct operations and are kept that way.

use crate::transform::{map_positions, Transformation};
use crate::OpsResult;
use rastr_core::{Raster, RasterView};

/// Rec.709 luma weight for the red channel.
pub const LUMA_R: f64 = 0.2126;

/// Rec.709 luma weight for the green channel.
pub const LUMA_G: f64 = 0.7152;

/// Rec.709 luma weight for the blue channel.
pub const LUMA_B: f64 = 0.0722;

/// The formula a [`PointTransform`] applies at every position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOp {
    /// Replicate the red channel.
    Red,
    /// Replicate the green channel.
    Green,
    /// Replicate the blue channel.
    Blue,
    /// Replicate the channel maximum.
    Value,
    /// Replicate the truncating channel average.
    Intensity,
    /// Replicate the rounded Rec.709 luma.
    Luma,
    /// Shift every channel by the given delta (negative darkens).
    Brighten(i32),
}

impl PointOp {
    /// Computes the new channel triple from the source channels.
    ///
    /// Results are not yet clamped; the shared skeleton clamps before
    /// painting.
    fn map(self, r: u8, g: u8, b: u8) -> (i64, i64, i64) {
        let (r, g, b) = (r as i64, g as i64, b as i64);
        match self {
            PointOp::Red => (r, r, r),
            PointOp::Green => (g, g, g),
            PointOp::Blue => (b, b, b),
            PointOp::Value => {
                let v = r.max(g).max(b);
                (v, v, v)
            }
            PointOp::Intensity => {
                let avg = (r + g + b) / 3;
                (avg, avg, avg)
            }
            PointOp::Luma => {
                let luma = (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64).round()
                    as i64;
                (luma, luma, luma)
            }
            PointOp::Brighten(delta) => {
                let delta = delta as i64;
                (r + delta, g + delta, b + delta)
            }
        }
    }
}

/// Applies a [`PointOp`] at every position of the source.
#[derive(Debug, Clone, Copy)]
pub struct PointTransform {
    op: PointOp,
}

impl PointTransform {
    /// Creates a point transform for the given formula.
    pub fn new(op: PointOp) -> Self {
        Self { op }
    }
}

impl Transformation for PointTransform {
    fn apply(&self, source: &dyn RasterView) -> OpsResult<Raster> {
        map_positions(source, |src, x, y| {
            let (r, g, b) = src.rgb(x, y)?;
            Ok(self.op.map(r, g, b))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(r: i32, g: i32, b: i32) -> Raster {
        let mut raster = Raster::new(1, 1).unwrap();
        raster.paint(0, 0, r, g, b).unwrap();
        raster
    }

    fn apply(op: PointOp, source: &Raster) -> (u8, u8, u8) {
        PointTransform::new(op)
            .apply(source)
            .unwrap()
            .rgb(0, 0)
            .unwrap()
    }

    #[test]
    fn test_component_projections() {
        let src = single(10, 20, 30);
        assert_eq!(apply(PointOp::Red, &src), (10, 10, 10));
        assert_eq!(apply(PointOp::Green, &src), (20, 20, 20));
        assert_eq!(apply(PointOp::Blue, &src), (30, 30, 30));
        assert_eq!(apply(PointOp::Value, &src), (30, 30, 30));
    }

    #[test]
    fn test_intensity_truncates() {
        // (100 + 1 + 254) / 3 = 118.33.. floors to 118
        let src = single(100, 1, 254);
        assert_eq!(apply(PointOp::Intensity, &src), (118, 118, 118));
    }

    #[test]
    fn test_luma_rounds() {
        // 0.2126*156 + 0.7152*156 + 0.0722*156 = 156
        assert_eq!(apply(PointOp::Luma, &single(156, 156, 156)), (156, 156, 156));
        // 0.2126*255 + 0.7152*0 + 0.0722*0 = 54.21 rounds to 54
        assert_eq!(apply(PointOp::Luma, &single(255, 0, 0)), (54, 54, 54));
    }

    #[test]
    fn test_brighten_and_darken_clamp() {
        assert_eq!(apply(PointOp::Brighten(100), &single(0, 0, 0)), (100, 100, 100));
        assert_eq!(
            apply(PointOp::Brighten(100), &single(255, 0, 0)),
            (255, 100, 100)
        );
        assert_eq!(apply(PointOp::Brighten(-50), &single(40, 200, 0)), (0, 150, 0));
    }

    #[test]
    fn test_projection_idempotent() {
        let src = single(10, 20, 30);
        let once = PointTransform::new(PointOp::Red).apply(&src).unwrap();
        let twice = PointTransform::new(PointOp::Red).apply(&once).unwrap();
        assert_eq!(once, twice);
    }
}
