//! rastr - raster image editing CLI
//!
//! Drives the transformation engine from the command line, either one
//! operation at a time or through line-command scripts.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rastr")]
#[command(author, version, about = "Raster image editing CLI")]
#[command(long_about = "
Edits raster images: plain-text PPM in and out, PNG/JPEG/BMP through the
conventional codec boundary, and the full transformation set in between.

Examples:
  rastr info koala.ppm                      # Show raster info
  rastr apply blur koala.ppm -o soft.ppm    # One-shot transformation
  rastr apply brighten koala.png -o lighter.png -a 40
  rastr apply sepia-grayscale koala.ppm -o vintage.bmp
  rastr run edit-session.txt                # Execute a command script
  rastr run                                 # Read commands from stdin

Script commands:
  load <path> <id>
  save <path> <id>
  brighten <amount> <src-id> <dest-id>
  <transformation> <src-id> <dest-id>
  quit
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a line-command script (stdin when no file is given)
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Apply a single named transformation to a file
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Display raster information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the `run` command.
#[derive(Args)]
struct RunArgs {
    /// Script file; commands are read from stdin when omitted
    script: Option<PathBuf>,
}

/// Arguments for the `apply` command.
#[derive(Args)]
struct ApplyArgs {
    /// Transformation name (e.g. blur, sharpen, brighten, sepia-grayscale)
    op: String,

    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Amount for brighten (negative darkens)
    #[arg(short, long, allow_hyphen_values = true)]
    amount: Option<i32>,
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Input image
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => commands::run::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
