//! CLI argument parsing for hopmap
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{InteractiveArgs, RunArgs, ValidateArgs};
pub use hopmap_core::format::OutputFormat;
use parse::parse_format;

/// Hopmap - breadth-first hop distances from a root node
#[derive(Parser, Debug)]
#[command(name = "hopmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to ~/.config/hopmap/config.toml)
    #[arg(long, global = true, env = "HOPMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress error messages (the exit code is still set)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `trace` or `hopmap_core=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a JSON graph and print hop distances from its root (default)
    Run(RunArgs),

    /// Enter a graph at prompts on stdin and print hop distances
    Interactive(InteractiveArgs),

    /// Check a JSON graph without traversing it
    Validate(ValidateArgs),
}
