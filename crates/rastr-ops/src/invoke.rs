//! Named transformation dispatch over the image registry.
//!
//! Surrounding layers (the line-command driver, a GUI shell) reach the
//! transformation engine through stable names: `"blur"`, `"brighten"`,
//! `"sepia-grayscale"` and so on. [`transformation_for`] resolves a name to
//! a boxed [`Transformation`]; [`apply_named`] runs one against a
//! [`Registry`].
//!
//! `apply_named` is atomic with respect to the registry: the destination id
//! is written only after the whole transformation has succeeded, so a
//! failure of any kind leaves the registry exactly as it was.

use crate::convolve::ConvolveTransform;
use crate::kernel::Kernel;
use crate::matrix::{self, MatrixTransform};
use crate::point::{PointOp, PointTransform};
use crate::transform::Transformation;
use crate::{OpsError, OpsResult};
use rastr_core::Registry;
use tracing::debug;

/// Stable names accepted by [`transformation_for`], in registration order.
pub const TRANSFORMATION_NAMES: &[&str] = &[
    "brighten",
    "value-component",
    "luma-component",
    "intensity-component",
    "red-component",
    "green-component",
    "blue-component",
    "blur",
    "sharpen",
    "red-grayscale",
    "green-grayscale",
    "blue-grayscale",
    "intensity-grayscale",
    "luma-grayscale",
    "sepia-grayscale",
];

/// Resolves a stable name to a transformation.
///
/// `amount` is consulted only by `"brighten"`; other names ignore it.
///
/// # Errors
///
/// [`OpsError::UnknownTransformation`] for an unrecognized name,
/// [`OpsError::InvalidParameter`] when `"brighten"` is requested without an
/// amount.
pub fn transformation_for(name: &str, amount: Option<i32>) -> OpsResult<Box<dyn Transformation>> {
    let transformation: Box<dyn Transformation> = match name {
        "red-component" => Box::new(PointTransform::new(PointOp::Red)),
        "green-component" => Box::new(PointTransform::new(PointOp::Green)),
        "blue-component" => Box::new(PointTransform::new(PointOp::Blue)),
        "value-component" => Box::new(PointTransform::new(PointOp::Value)),
        "intensity-component" => Box::new(PointTransform::new(PointOp::Intensity)),
        "luma-component" => Box::new(PointTransform::new(PointOp::Luma)),
        "brighten" => {
            let delta = amount.ok_or_else(|| {
                OpsError::InvalidParameter("brighten requires an integer amount".into())
            })?;
            Box::new(PointTransform::new(PointOp::Brighten(delta)))
        }
        "blur" => Box::new(ConvolveTransform::new(Kernel::gaussian_blur())?),
        "sharpen" => Box::new(ConvolveTransform::new(Kernel::sharpen())?),
        "red-grayscale" => Box::new(MatrixTransform::new(matrix::red_grayscale())?),
        "green-grayscale" => Box::new(MatrixTransform::new(matrix::green_grayscale())?),
        "blue-grayscale" => Box::new(MatrixTransform::new(matrix::blue_grayscale())?),
        "intensity-grayscale" => Box::new(MatrixTransform::new(matrix::intensity_grayscale())?),
        "luma-grayscale" => Box::new(MatrixTransform::new(matrix::luma_grayscale())?),
        "sepia-grayscale" => Box::new(MatrixTransform::new(matrix::sepia())?),
        _ => return Err(OpsError::UnknownTransformation(name.into())),
    };
    Ok(transformation)
}

/// Applies the named transformation to `registry[source_id]` and stores the
/// result under `dest_id`.
///
/// The source raster is untouched; on any failure the registry is left
/// exactly as it was (the destination id is not written).
pub fn apply_named(
    registry: &mut Registry,
    name: &str,
    source_id: &str,
    dest_id: &str,
    amount: Option<i32>,
) -> OpsResult<()> {
    let transformation = transformation_for(name, amount)?;
    let source = registry.get(source_id)?;
    let result = transformation.apply(source)?;
    debug!(name, source_id, dest_id, "applied transformation");
    registry.put(dest_id, result);
    Ok(())
}
