//! Line-command script execution.
//!
//! Runs the classic editing session grammar against a single [`Registry`]:
//!
//! ```text
//! load koala.ppm koala
//! brighten 40 koala koala-bright
//! blur koala-bright koala-soft
//! save out/koala-soft.png koala-soft
//! quit
//! ```
//!
//! A failed line is reported and the session continues; the registry is
//! never left half-updated by a failed command.

use crate::RunArgs;
use anyhow::{Context, Result};
use rastr_core::Registry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::{debug, warn};

/// Runs the `run` command.
pub fn run(args: RunArgs, verbose: bool) -> Result<()> {
    let mut registry = Registry::new();
    match args.script {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("Failed to open: {}", path.display()))?;
            execute(&mut registry, BufReader::new(file), verbose)
        }
        None => execute(&mut registry, std::io::stdin().lock(), verbose),
    }
}

/// Executes every line from `reader` until `quit` or end of input.
fn execute<R: BufRead>(registry: &mut Registry, reader: R, verbose: bool) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" {
            debug!("quit");
            break;
        }
        match execute_line(registry, line) {
            Ok(()) => {
                if verbose {
                    println!("ok: {line}");
                }
            }
            Err(err) => {
                // Report and keep accepting commands
                warn!(line, error = %err, "command failed");
                eprintln!("error: {err:#}");
            }
        }
    }
    Ok(())
}

/// Executes a single non-empty command line.
fn execute_line(registry: &mut Registry, line: &str) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(());
    };

    match command {
        "load" => {
            let path = tokens.next().context("load needs <path> <id>")?;
            let id = tokens.next().context("load needs <path> <id>")?;
            let raster = super::load_image(path.as_ref())?;
            registry.put(id, raster);
        }
        "save" => {
            let path = tokens.next().context("save needs <path> <id>")?;
            let id = tokens.next().context("save needs <path> <id>")?;
            let raster = registry.get(id)?;
            super::save_image(path.as_ref(), raster)?;
        }
        "brighten" => {
            let amount: i32 = tokens
                .next()
                .context("brighten needs <amount> <src-id> <dest-id>")?
                .parse()
                .context("brighten amount must be an integer")?;
            let source = tokens
                .next()
                .context("brighten needs <amount> <src-id> <dest-id>")?;
            let dest = tokens
                .next()
                .context("brighten needs <amount> <src-id> <dest-id>")?;
            rastr_ops::apply_named(registry, "brighten", source, dest, Some(amount))?;
        }
        name => {
            let source = tokens
                .next()
                .with_context(|| format!("{name} needs <src-id> <dest-id>"))?;
            let dest = tokens
                .next()
                .with_context(|| format!("{name} needs <src-id> <dest-id>"))?;
            rastr_ops::apply_named(registry, name, source, dest, None)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rastr_core::{Raster, RasterView};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn seeded_registry() -> Registry {
        let mut raster = Raster::new(1, 1).unwrap();
        raster.paint(0, 0, 100, 100, 100).unwrap();
        let mut registry = Registry::new();
        registry.put("img", raster);
        registry
    }

    #[test]
    fn test_transformation_line() {
        let mut registry = seeded_registry();
        execute_line(&mut registry, "brighten 50 img bright").unwrap();
        assert_eq!(
            registry.get("bright").unwrap().rgb(0, 0).unwrap(),
            (150, 150, 150)
        );
    }

    #[test]
    fn test_missing_tokens_leave_registry_untouched() {
        let mut registry = seeded_registry();
        assert!(execute_line(&mut registry, "blur img").is_err());
        assert!(execute_line(&mut registry, "brighten 10 img").is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_command_reported() {
        let mut registry = seeded_registry();
        assert!(execute_line(&mut registry, "posterize img out").is_err());
        assert!(!registry.contains("out"));
    }

    #[test]
    fn test_script_continues_after_error() {
        let mut registry = seeded_registry();
        let script = "posterize img broken\nvalue-component img v\nquit\nred-component img never\n";
        execute(&mut registry, Cursor::new(script), false).unwrap();
        // The bad line was skipped, the good one ran, quit stopped the rest
        assert!(registry.contains("v"));
        assert!(!registry.contains("broken"));
        assert!(!registry.contains("never"));
    }

    #[test]
    fn test_load_save_round_trip() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("in.ppm");
        let dest = dir.path().join("out.ppm");
        std::fs::write(&source, "P3\n1 1\n255\n10 20 30\n").unwrap();

        let mut registry = Registry::new();
        let script = format!(
            "load {} img\nsepia-grayscale img toned\nsave {} toned\n",
            source.display(),
            dest.display()
        );
        execute(&mut registry, Cursor::new(script), false).unwrap();

        let out = rastr_io::read(&dest).unwrap();
        // round(0.393*10 + 0.769*20 + 0.189*30) = 25, etc.
        assert_eq!(out.rgb(0, 0).unwrap(), (25, 22, 17));
    }
}
