//! The transformation seam and the shared per-position skeleton.
//!
//! Every transformation family maps a source [`RasterView`] to a fresh
//! [`Raster`] of the same dimensions: iterate every position (y outer,
//! x inner), derive new channel values, clamp them into `0..=255`, paint.
//! The families differ only in the derivation step, so they all funnel
//! through [`map_positions`].

use crate::OpsResult;
use rastr_core::{Raster, RasterView};

/// A polymorphic `Raster -> Raster` operation.
///
/// Implementations never mutate the source; they allocate and return a new
/// raster of identical width and height.
pub trait Transformation {
    /// Applies the transformation to `source`.
    fn apply(&self, source: &dyn RasterView) -> OpsResult<Raster>;
}

/// Constrains a computed channel value to the valid range.
#[inline]
pub fn clamp(value: i64) -> i32 {
    value.clamp(0, 255) as i32
}

/// Allocates the output raster and paints every position with the clamped
/// result of `derive`.
pub(crate) fn map_positions<F>(source: &dyn RasterView, mut derive: F) -> OpsResult<Raster>
where
    F: FnMut(&dyn RasterView, u32, u32) -> OpsResult<(i64, i64, i64)>,
{
    let mut output = Raster::new(source.width(), source.height())?;
    for y in 0..source.height() {
        for x in 0..source.width() {
            let (r, g, b) = derive(source, x, y)?;
            output.paint(x, y, clamp(r), clamp(g), clamp(b))?;
        }
    }
    Ok(output)
}
