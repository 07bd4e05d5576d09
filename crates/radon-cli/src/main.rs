//! radon - rotation sweep and sinogram CLI
//!
//! Rotates an image through a range of angles, saves every rotated frame,
//! and builds the sinogram from their row projections.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "radon")]
#[command(author, version, about = "Rotation sweep and sinogram generator")]
#[command(long_about = "
Rotates an image by evenly spaced angles and accumulates a sinogram
(one column of row means per angle).

Examples:
  radon sweep letters.png                       # 360 frames + sinogram.png
  radon sweep letters.png --angle-delta 90      # 4 frames, 4-column sinogram
  radon sweep in.png --angle-max 180 --no-rotated -O out/
  radon rotate in.png -o out.png -a 30 --filter nearest
  RUST_LOG=radon_ops=debug radon sweep in.png   # per-angle logging
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate through all angles and build the sinogram
    #[command(visible_alias = "s")]
    Sweep(SweepArgs),

    /// Rotate image by a single angle
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),
}

#[derive(Args)]
struct SweepArgs {
    /// Input image
    input: PathBuf,

    /// Sweep end in degrees (exclusive)
    #[arg(long, default_value = "360")]
    angle_max: f64,

    /// Step between angles in degrees
    #[arg(short = 'd', long, default_value = "1")]
    angle_delta: f64,

    /// Filter: nearest, bilinear
    #[arg(short, long, default_value = "bilinear")]
    filter: String,

    /// Output directory
    #[arg(short = 'O', long, default_value = ".")]
    out_dir: PathBuf,

    /// File name pattern for rotated frames ({angle} = degrees)
    #[arg(long, default_value = radon_ops::sweep::DEFAULT_ROTATED_PATTERN)]
    pattern: String,

    /// Skip writing rotated frames
    #[arg(long)]
    no_rotated: bool,

    /// Sinogram file name
    #[arg(long, default_value = radon_ops::sweep::DEFAULT_SINOGRAM_NAME)]
    sinogram: String,
}

#[derive(Args)]
struct RotateArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Rotation angle in degrees
    #[arg(short, long, allow_hyphen_values = true)]
    angle: f64,

    /// Filter: nearest, bilinear
    #[arg(short, long, default_value = "bilinear")]
    filter: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Sweep(args) => commands::sweep::run(args, cli.verbose),
        Commands::Rotate(args) => commands::rotate::run(args, cli.verbose),
    }
}
