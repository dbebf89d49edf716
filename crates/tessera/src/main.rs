//! # tessera
//!
//! Tessera - Keyed virtual tree reconciler.
//!
//! ## Name Origin
//!
//! **Tessera** is a single tile of a mosaic. Trees are laid out tile by tile,
//! and on every change only the tiles that differ are reset.
//!
//! The command line mounts JSON node descriptions onto the in-memory host and
//! prints the resulting markup, mutation journal or mutation counts.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::config::TesseraConfig;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Keyed virtual tree reconciler", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file path (defaults to ./tessera.config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mount a description into an empty container and print it
    Render(commands::render::RenderArgs),

    /// Mount a description, update it to another, and report the update
    Patch(commands::patch::PatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref());
    init_logging(cli.verbose, &config);

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Patch(args) => commands::patch::run(args, &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, so command output on stdout stays clean.
fn init_logging(verbose: u8, config: &TesseraConfig) {
    let level = match verbose {
        0 => config.level(),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}
