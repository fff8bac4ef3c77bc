//! # rastr-core
//!
//! Core types for raster image editing.
//!
//! This crate provides the foundational types used throughout the rastr
//! workspace:
//!
//! - [`Pixel`], [`Channel`] - validated RGB triples and channel selectors
//! - [`Raster`] - the owned, mutable image grid
//! - [`RasterView`] - read-only capability consumed by transformations
//! - [`Registry`] - the id -> raster store shared between commands
//!
//! ## Design Philosophy
//!
//! The core invariant is **transformations never mutate their input**. A
//! transformation reads through [`RasterView`] and paints a brand-new
//! [`Raster`]; the source stays valid and can remain registered under any
//! number of ids. Channel values are validated on the way in (`0..=255`)
//! and stored as `u8`, so a constructed pixel can never hold an invalid
//! value.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! rastr-core (this crate)
//!    ^
//!    |
//!    +-- rastr-ops (point / matrix / convolution transformations)
//!    +-- rastr-io  (text codec, conventional formats)
//!    +-- rastr-cli (line-command driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;
pub mod registry;

// Re-exports for convenience
pub use error::{Error, Result};
pub use pixel::{Channel, Pixel, CHANNEL_MAX, CHANNEL_MIN};
pub use raster::{Raster, RasterView};
pub use registry::Registry;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rastr_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{Channel, Pixel, CHANNEL_MAX, CHANNEL_MIN};
    pub use crate::raster::{Raster, RasterView};
    pub use crate::registry::Registry;
}
