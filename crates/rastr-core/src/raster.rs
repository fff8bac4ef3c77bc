//! Owned raster storage and the read-only view used by transformations.
//!
//! # Types
//!
//! - [`Raster`] - a width x height grid of optional [`Pixel`]s, row-major
//! - [`RasterView`] - read-only capability over a raster
//!
//! # Design
//!
//! A raster's dimensions are fixed at construction and it is exclusively
//! owned by whichever component currently holds it. Transformations never
//! mutate their input; they read through [`RasterView`] and paint a fresh
//! output raster. That invariant is what makes it safe to keep one raster
//! registered under several ids at once.
//!
//! Cells start out unpainted. Reading a channel from an unpainted cell is
//! [`Error::UnpaintedPosition`], which is deliberately distinct from
//! [`Error::PositionOutOfBounds`]: the first is a half-built image, the
//! second a coordinate bug.
//!
//! # Used By
//!
//! - `rastr-ops` - transformation source/output
//! - `rastr-io` - codec decode target and encode source

use crate::error::{Error, Result};
use crate::pixel::{Channel, Pixel};

/// Read-only capability over a raster.
///
/// Transformations consume this trait rather than [`Raster`] directly, so
/// they stay independent of the concrete storage.
pub trait RasterView {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Reads one channel at the given position.
    ///
    /// # Errors
    ///
    /// [`Error::PositionOutOfBounds`] for invalid coordinates,
    /// [`Error::UnpaintedPosition`] if the cell was never painted.
    fn channel(&self, x: u32, y: u32, channel: Channel) -> Result<u8>;

    /// Reads all three channels at the given position.
    fn rgb(&self, x: u32, y: u32) -> Result<(u8, u8, u8)> {
        Ok((
            self.channel(x, y, Channel::Red)?,
            self.channel(x, y, Channel::Green)?,
            self.channel(x, y, Channel::Blue)?,
        ))
    }
}

/// A 2-D grid of RGB pixels, the image's in-memory form.
///
/// Indexing is `(x, y)` with `0 <= x < width`, `0 <= y < height`; storage is
/// row-major. Cells hold `Option<Pixel>` so a freshly constructed raster is
/// fully unpainted and fills in through [`Raster::paint`].
///
/// # Example
///
/// ```
/// use rastr_core::{Channel, Raster, RasterView};
///
/// let mut raster = Raster::new(2, 2).unwrap();
/// raster.paint(0, 0, 255, 0, 0).unwrap();
/// assert_eq!(raster.channel(0, 0, Channel::Red).unwrap(), 255);
/// assert!(raster.channel(1, 1, Channel::Red).is_err()); // unpainted
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    cells: Vec<Option<Pixel>>,
}

impl Raster {
    /// Creates a raster with every cell unpainted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(Error::invalid_dimensions(width, height));
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Paints the pixel at `(x, y)`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// [`Error::PositionOutOfBounds`] for invalid coordinates,
    /// [`Error::ChannelOutOfRange`] if any channel is outside `0..=255`.
    /// On error the cell keeps its previous value.
    pub fn paint(&mut self, x: u32, y: u32, r: i32, g: i32, b: i32) -> Result<()> {
        let idx = self.index(x, y)?;
        let pixel = Pixel::new(r, g, b)?;
        self.cells[idx] = Some(pixel);
        Ok(())
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::PositionOutOfBounds`] or [`Error::UnpaintedPosition`].
    pub fn pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        let idx = self.index(x, y)?;
        self.cells[idx].ok_or(Error::unpainted_position(x, y))
    }

    /// Returns `true` once every cell has been painted.
    pub fn is_fully_painted(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::position_out_of_bounds(
                x,
                y,
                self.width,
                self.height,
            ));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl RasterView for Raster {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn channel(&self, x: u32, y: u32, channel: Channel) -> Result<u8> {
        Ok(self.pixel(x, y)?.channel(channel))
    }
}
