//! One-shot transformation command.
//!
//! Loads a file, applies a single named transformation, saves the result.

use crate::ApplyArgs;
use anyhow::Result;
use tracing::debug;

/// Runs the `apply` command.
pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let source = super::load_image(&args.input)?;

    let transformation = rastr_ops::transformation_for(&args.op, args.amount)?;
    debug!(op = %args.op, input = %args.input.display(), "applying transformation");
    let result = transformation.apply(&source)?;

    super::save_image(&args.output, &result)?;

    if verbose {
        println!(
            "Applied {}: {} -> {}",
            args.op,
            args.input.display(),
            args.output.display()
        );
    }
    Ok(())
}
