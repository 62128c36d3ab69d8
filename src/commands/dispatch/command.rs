//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::OutputFormat;
use hopmap_core::config::Config;
use hopmap_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            config,
            format,
            start,
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
