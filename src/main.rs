//! Hopmap - breadth-first hop distances for small undirected graphs
//!
//! Reads a graph from a JSON document or interactive prompts, validates it,
//! and prints how many edges separate the root from every reachable node.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use hopmap_core::config::Config;
use hopmap_core::error::{ExitCode as HopmapExitCode, HopmapError};
use hopmap_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists; honour a JSON request
            // seen on the raw command line.
            if argv_format_json {
                let hopmap_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => HopmapError::UsageError(err.to_string()),
                };

                eprintln!("{}", hopmap_error.to_json());
                return ExitCode::from(hopmap_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = Config::load(cli.config.as_deref());
    let format = cli
        .format
        .or_else(|| config.as_ref().ok().map(|c| c.format))
        .unwrap_or_default();

    let result = config.and_then(|config| commands::dispatch::run(&cli, &config, format, start));

    match result {
        Ok(()) => ExitCode::from(HopmapExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();
            tracing::debug!(error = %e, code = exit_code as u8, "command_failed");

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let is_json = |value: &str| value.parse::<OutputFormat>().ok() == Some(OutputFormat::Json);

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| is_json(&v)) {
                return true;
            }
        } else if arg.strip_prefix("--format=").is_some_and(is_json) {
            return true;
        }
    }
    false
}
