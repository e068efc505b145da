//! Strand CLI - bidi-aware text utilities.
//!
//! Provides commands for:
//! - `slice`: Slice text while keeping its embedding context
//! - `split`: Split text on a separator, slicing each segment the same way
//! - `fill`: Fill `{{key}}` placeholders in a template
//! - `wrap`: Wrap text in a directional embedding
//! - `debug`: Show embedding marks as readable tokens

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DebugArgs, FillArgs, SliceArgs, SplitArgs, WrapArgs};
use output::Output;

/// Strand - bidi-aware text utilities.
#[derive(Parser)]
#[command(name = "strand", version, about)]
struct Cli {
    /// Enable verbose output (debug logs on stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slice text, re-opening and closing embeddings at the cut.
    Slice(SliceArgs),
    /// Split text on a literal or regex separator.
    Split(SplitArgs),
    /// Fill `{{key}}` placeholders in a template.
    Fill(FillArgs),
    /// Wrap text in a left-to-right or right-to-left embedding.
    Wrap(WrapArgs),
    /// Print text with embedding marks shown as tokens.
    Debug(DebugArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Slice(args) => args.execute(),
        Commands::Split(args) => args.execute(),
        Commands::Fill(args) => args.execute(),
        Commands::Wrap(args) => args.execute(),
        Commands::Debug(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
