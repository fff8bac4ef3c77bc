//! # rastr-ops
//!
//! The transformation engine: every operation maps a source raster to a
//! freshly allocated output raster of the same dimensions, clamping each
//! computed channel into `0..=255` before painting.
//!
//! # Modules
//!
//! - [`point`] - per-pixel functions of that pixel's own channels
//! - [`matrix`] - fixed 3x3 linear recombination of the channels
//! - [`convolve`] - spatial kernels with zero-padded borders
//! - [`kernel`] - the square weight matrix both kinds of kernel share
//! - [`invoke`] - stable-name dispatch over the image registry
//!
//! # Example
//!
//! ```rust
//! use rastr_core::{Raster, RasterView};
//! use rastr_ops::point::{PointOp, PointTransform};
//! use rastr_ops::Transformation;
//!
//! let mut source = Raster::new(1, 1).unwrap();
//! source.paint(0, 0, 10, 200, 30).unwrap();
//!
//! let value = PointTransform::new(PointOp::Value);
//! let result = value.apply(&source).unwrap();
//! assert_eq!(result.rgb(0, 0).unwrap(), (200, 200, 200));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod convolve;
pub mod invoke;
pub mod kernel;
pub mod matrix;
pub mod point;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use invoke::{apply_named, transformation_for, TRANSFORMATION_NAMES};
pub use kernel::Kernel;
pub use transform::{clamp, Transformation};
