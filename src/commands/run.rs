//! `hopmap run`: load a JSON graph and print its hop distances

use crate::cli::args::symmetry_policy;
use crate::cli::RunArgs;
use hopmap_core::error::Result;
use hopmap_core::input;
use hopmap_core::trace_time;

use super::dispatch::{Command, CommandContext};
use super::output::print_traversal;

impl Command for RunArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let path = ctx.config.resolve_graph_file(self.file.as_deref());
        let policy = symmetry_policy(self.require_symmetric, ctx.config.symmetry);
        let strategy = self.strategy.unwrap_or(ctx.config.strategy);

        tracing::debug!(path = %path.display(), ?policy, %strategy, "run");

        let graph = input::load_graph(&path, policy)?;
        trace_time!(ctx.start, "load_graph");

        let distances = graph.distances(strategy)?;
        trace_time!(ctx.start, "traverse", reachable = distances.len());

        print_traversal(ctx.format, &graph, strategy, &distances)
    }
}
