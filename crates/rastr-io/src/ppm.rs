//! Plain-text PPM (P3) format support.
//!
//! The encoding is a `P3` magic line, a `<width> <height>` line, a
//! `<maxValue>` line, then `r g b` integer triples in row-major order.
//! Lines beginning with `#` are comments and may appear anywhere, including
//! inside the pixel data. The max value is consumed on read but never
//! validated or rescaled; writes always emit 255 and one triple per line,
//! never comments.

use crate::{IoError, IoResult};
use rastr_core::{Raster, RasterView};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const PPM_MAGIC: &str = "P3";
const PPM_MAX_VALUE: u32 = 255;

/// Reads a plain-text PPM file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Reads a plain-text PPM image from any buffered reader.
///
/// # Errors
///
/// - [`IoError::UnrecognizedFormat`] if the first non-comment token is not
///   `P3`
/// - [`IoError::TruncatedInput`] if fewer than `width * height * 3 + 3`
///   integer tokens follow the magic
/// - [`IoError::Decode`] on a non-integer token
/// - `InvalidDimensions` (propagated from [`Raster::new`]) when either
///   dimension is below 1
pub fn read_from<R: BufRead>(reader: R) -> IoResult<Raster> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        // Comment lines are dropped before any tokenizing
        if line.starts_with('#') {
            continue;
        }
        text.push_str(&line);
        text.push('\n');
    }
    parse(&text)
}

fn parse(text: &str) -> IoResult<Raster> {
    let mut tokens = text.split_whitespace();

    let magic = tokens
        .next()
        .ok_or_else(|| IoError::UnrecognizedFormat("empty input".into()))?;
    if magic != PPM_MAGIC {
        return Err(IoError::UnrecognizedFormat(format!(
            "plain PPM must begin with {PPM_MAGIC:?}, found {magic:?}"
        )));
    }

    let values = tokens
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| IoError::Decode(format!("expected an integer, found {token:?}")))
        })
        .collect::<IoResult<Vec<i64>>>()?;

    if values.len() < 3 {
        return Err(IoError::TruncatedInput {
            expected: 3,
            found: values.len(),
        });
    }

    let width = dimension(values[0]);
    let height = dimension(values[1]);
    let max_value = values[2];
    if max_value != i64::from(PPM_MAX_VALUE) {
        debug!(max_value, "PPM max value is not 255; values taken as-is");
    }

    let expected = width as usize * height as usize * 3 + 3;
    if values.len() < expected {
        return Err(IoError::TruncatedInput {
            expected,
            found: values.len(),
        });
    }

    let mut raster = Raster::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let base = 3 + (y as usize * width as usize + x as usize) * 3;
            raster.paint(
                x,
                y,
                channel(values[base]),
                channel(values[base + 1]),
                channel(values[base + 2]),
            )?;
        }
    }
    Ok(raster)
}

// Out-of-range declared dimensions collapse toward the invalid end so that
// Raster::new reports them; actual dimensions never approach these bounds.
fn dimension(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

// Preserves out-of-range-ness across the narrowing so paint still rejects it.
fn channel(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Writes a plain-text PPM file.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, raster)?;
    writer.flush()?;
    Ok(())
}

/// Writes a raster as plain-text PPM to any writer.
///
/// Emits the header triple then one `r g b` line per pixel in row-major
/// order. Channel values are taken as-is.
///
/// # Errors
///
/// `UnpaintedPosition` (propagated from the raster) if any cell was never
/// painted.
pub fn write_to<W: Write>(writer: &mut W, raster: &Raster) -> IoResult<()> {
    writeln!(writer, "{PPM_MAGIC}")?;
    writeln!(writer, "{} {}", raster.width(), raster.height())?;
    writeln!(writer, "{PPM_MAX_VALUE}")?;
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let (r, g, b) = raster.rgb(x, y)?;
            writeln!(writer, "{r} {g} {b}")?;
        }
    }
    Ok(())
}
