use std::path::PathBuf;

use clap::Args;
use hopmap_core::graph::{Strategy, SymmetryPolicy};

use super::parse::parse_strategy;

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Graph file [default: from config, else graph.json]
    pub file: Option<PathBuf>,

    /// Traversal strategy: queue, layered or channel
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Reject graphs whose adjacency lists are not symmetric
    #[arg(long)]
    pub require_symmetric: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    /// Traversal strategy: queue, layered or channel
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Graph file [default: from config, else graph.json]
    pub file: Option<PathBuf>,

    /// Reject graphs whose adjacency lists are not symmetric
    #[arg(long)]
    pub require_symmetric: bool,
}

/// Symmetry policy from a `--require-symmetric` flag, falling back to config
pub fn symmetry_policy(require_symmetric: bool, configured: SymmetryPolicy) -> SymmetryPolicy {
    if require_symmetric {
        SymmetryPolicy::Enforce
    } else {
        configured
    }
}
