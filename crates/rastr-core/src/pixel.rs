//! Validated RGB pixel type and channel selectors.
//!
//! # Types
//!
//! - [`Pixel`] - an immutable RGB triple, each channel in `0..=255`
//! - [`Channel`] - selector for a single channel of a pixel
//!
//! # Design
//!
//! Construction takes `i32` so that out-of-range inputs are representable
//! and rejected with [`Error::ChannelOutOfRange`]; once constructed the
//! channels are stored as `u8` and the value can never leave the valid
//! range. A pixel is never mutated in place: replacing the color at a
//! raster position paints a new `Pixel` over the old one.
//!
//! # Used By
//!
//! - [`crate::raster::Raster`] - cell storage
//! - `rastr-ops` - transformation inputs and outputs

use crate::error::{Error, Result};
use std::fmt;

/// Smallest valid channel value.
pub const CHANNEL_MIN: i32 = 0;

/// Largest valid channel value.
pub const CHANNEL_MAX: i32 = 255;

/// Selects one channel of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// An RGB color value with all channels validated into `0..=255`.
///
/// # Example
///
/// ```
/// use rastr_core::{Channel, Pixel};
///
/// let px = Pixel::new(100, 1, 254).unwrap();
/// assert_eq!(px.channel(Channel::Red), 100);
/// assert_eq!(px.b(), 254);
///
/// assert!(Pixel::new(256, 0, 0).is_err());
/// assert!(Pixel::new(0, -1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
}

impl Pixel {
    /// Creates a pixel from the given channel values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] if any value is outside
    /// `0..=255`. The error names the first offending channel.
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self> {
        Ok(Self {
            r: validate(Channel::Red, r)?,
            g: validate(Channel::Green, g)?,
            b: validate(Channel::Blue, b)?,
        })
    }

    /// Red channel value.
    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel value.
    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel value.
    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Value of the selected channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}

fn validate(channel: Channel, value: i32) -> Result<u8> {
    if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&value) {
        return Err(Error::channel_out_of_range(channel, value));
    }
    Ok(value as u8)
}
