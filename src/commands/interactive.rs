//! `hopmap interactive`: enter a graph at prompts and print its hop distances
//!
//! Prompts go to stderr so stdout only carries the result.

use std::io;

use crate::cli::InteractiveArgs;
use hopmap_core::error::Result;
use hopmap_core::input;
use hopmap_core::trace_time;

use super::dispatch::{Command, CommandContext};
use super::output::print_traversal;

impl Command for InteractiveArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let strategy = self.strategy.unwrap_or(ctx.config.strategy);

        let graph = input::read_graph(io::stdin().lock(), io::stderr())?;
        trace_time!(ctx.start, "read_graph", nodes = graph.nodes.len());

        let distances = graph.distances(strategy)?;
        trace_time!(ctx.start, "traverse", reachable = distances.len());

        print_traversal(ctx.format, &graph, strategy, &distances)
    }
}
