//! Error types for core raster operations.
//!
//! This module provides the unified error type for pixel validation, raster
//! access and registry lookups.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the image data model:
//!
//! - Channel validation (construction or repaint with a value outside 0..=255)
//! - Raster access (out-of-bounds coordinates, reads from unpainted positions)
//! - Raster construction (zero width or height)
//! - Registry lookups (unknown image id)
//!
//! Every failure is local and synchronous; nothing here is retryable.
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::{Error, Result};
//!
//! fn check_bounds(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::position_out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```

use crate::pixel::Channel;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the raster data model.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Validation**: [`ChannelOutOfRange`](Error::ChannelOutOfRange),
///   [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Access**: [`PositionOutOfBounds`](Error::PositionOutOfBounds),
///   [`UnpaintedPosition`](Error::UnpaintedPosition)
/// - **Lookup**: [`NoSuchImage`](Error::NoSuchImage)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A channel value is outside the valid `0..=255` range.
    ///
    /// Returned by pixel construction and by `Raster::paint`.
    #[error("{channel} channel value {value} out of range 0..=255")]
    ChannelOutOfRange {
        /// Which channel carried the invalid value.
        channel: Channel,
        /// The rejected value.
        value: i32,
    },

    /// Coordinates are outside the raster bounds.
    ///
    /// Returned when accessing position (x, y) where `x >= width` or
    /// `y >= height`.
    #[error("position ({x}, {y}) out of bounds for raster {width}x{height}")]
    PositionOutOfBounds {
        /// X coordinate that was out of bounds.
        x: u32,
        /// Y coordinate that was out of bounds.
        y: u32,
        /// Raster width.
        width: u32,
        /// Raster height.
        height: u32,
    },

    /// The position is in bounds but was never painted.
    ///
    /// Distinct from [`PositionOutOfBounds`](Error::PositionOutOfBounds):
    /// the coordinates are valid, the cell just holds no pixel yet.
    #[error("position ({x}, {y}) was never painted")]
    UnpaintedPosition {
        /// X coordinate of the unpainted cell.
        x: u32,
        /// Y coordinate of the unpainted cell.
        y: u32,
    },

    /// Raster dimensions are invalid.
    ///
    /// Width and height must both be at least 1.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// No image is registered under the given id.
    #[error("no image with id {0:?}")]
    NoSuchImage(String),
}

impl Error {
    /// Creates an [`Error::ChannelOutOfRange`] error.
    #[inline]
    pub fn channel_out_of_range(channel: Channel, value: i32) -> Self {
        Self::ChannelOutOfRange { channel, value }
    }

    /// Creates an [`Error::PositionOutOfBounds`] error.
    #[inline]
    pub fn position_out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::PositionOutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::UnpaintedPosition`] error.
    #[inline]
    pub fn unpainted_position(x: u32, y: u32) -> Self {
        Self::UnpaintedPosition { x, y }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }

    /// Creates an [`Error::NoSuchImage`] error.
    #[inline]
    pub fn no_such_image(id: impl Into<String>) -> Self {
        Self::NoSuchImage(id.into())
    }

    /// Returns `true` if this is an access error (bounds or unpainted).
    #[inline]
    pub fn is_access_error(&self) -> bool {
        matches!(
            self,
            Self::PositionOutOfBounds { .. } | Self::UnpaintedPosition { .. }
        )
    }

    /// Returns `true` if this is a validation error (channel range or
    /// dimensions).
    #[inline]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::ChannelOutOfRange { .. } | Self::InvalidDimensions { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_out_of_range_display() {
        let err = Error::channel_out_of_range(Channel::Red, 300);
        let msg = err.to_string();
        assert!(msg.contains("red"));
        assert!(msg.contains("300"));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_position_out_of_bounds_display() {
        let err = Error::position_out_of_bounds(10, 5, 8, 4);
        let msg = err.to_string();
        assert!(msg.contains("(10, 5)"));
        assert!(msg.contains("8x4"));
        assert!(err.is_access_error());
    }

    #[test]
    fn test_unpainted_is_not_validation() {
        let err = Error::unpainted_position(0, 0);
        assert!(err.is_access_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_no_such_image_display() {
        let err = Error::no_such_image("koala");
        assert!(err.to_string().contains("koala"));
    }
}
