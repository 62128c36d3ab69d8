//! Command dispatch logic for hopmap

use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat, RunArgs};
use hopmap_core::config::Config;
use hopmap_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(config, format, start);

    debug!(elapsed = ?start.elapsed(), %format, "dispatch");

    match &cli.command {
        // Without a subcommand, behave like `run` on the default graph file
        None => RunArgs::default().execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run(args) => args.execute(ctx),
            Commands::Interactive(args) => args.execute(ctx),
            Commands::Validate(args) => args.execute(ctx),
        }
    }
}
