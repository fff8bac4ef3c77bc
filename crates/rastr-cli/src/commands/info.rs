//! Raster information command.

use crate::InfoArgs;
use anyhow::Result;
use rastr_core::RasterView;
use rastr_io::Format;

/// Runs the `info` command.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    let raster = super::load_image(&args.input)?;

    println!("{}", args.input.display());
    println!("  format: {:?}", Format::from_extension(&args.input));
    println!("  size:   {}x{}", raster.width(), raster.height());

    if verbose {
        println!("  pixels: {}", raster.width() as u64 * raster.height() as u64);
    }
    Ok(())
}
