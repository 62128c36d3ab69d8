//! Rendering of traversal and validation results in each output format

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use hopmap_core::error::Result;
use hopmap_core::graph::{DistanceMap, Graph, NodeId, Strategy, SymmetryPolicy};

/// Version tag written in records headers
const RECORDS_VERSION: u32 = 1;

/// Print a graph and its distance map
pub fn print_traversal(
    format: OutputFormat,
    graph: &Graph,
    strategy: Strategy,
    distances: &DistanceMap,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("Graph: {graph}");
            println!("Distances: {distances}");
        }
        OutputFormat::Json => {
            let sorted: BTreeMap<NodeId, usize> = distances.iter().collect();
            let output = json!({
                "root": graph.root,
                "nodes": graph.nodes,
                "strategy": strategy,
                "reachable": distances.len(),
                "distances": sorted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H hopmap={} root={} nodes={} reachable={} strategy={}",
                RECORDS_VERSION,
                graph.root,
                graph.nodes.len(),
                distances.len(),
                strategy
            );
            for (node, hops) in distances.sorted() {
                println!("D {node} {hops}");
            }
        }
    }
    Ok(())
}

/// Print the outcome of a successful validation
pub fn print_validation(
    format: OutputFormat,
    path: &Path,
    graph: &Graph,
    policy: SymmetryPolicy,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!(
                "Graph is valid: {} nodes, root {}",
                graph.nodes.len(),
                graph.root
            );
        }
        OutputFormat::Json => {
            let output = json!({
                "valid": true,
                "path": path.display().to_string(),
                "root": graph.root,
                "nodes": graph.nodes.len(),
                "entries": graph.entry_count(),
                "symmetry": policy,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H hopmap={} valid=true root={} nodes={} entries={}",
                RECORDS_VERSION,
                graph.root,
                graph.nodes.len(),
                graph.entry_count()
            );
        }
    }
    Ok(())
}
