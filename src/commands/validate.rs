//! `hopmap validate`: check a JSON graph without traversing it

use crate::cli::args::symmetry_policy;
use crate::cli::ValidateArgs;
use hopmap_core::error::Result;
use hopmap_core::input;

use super::dispatch::{Command, CommandContext};
use super::output::print_validation;

impl Command for ValidateArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let path = ctx.config.resolve_graph_file(self.file.as_deref());
        let policy = symmetry_policy(self.require_symmetric, ctx.config.symmetry);

        let graph = input::load_graph(&path, policy)?;
        print_validation(ctx.format, &path, &graph, policy)
    }
}
