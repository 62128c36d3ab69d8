//! Breadth-first traversal implementations
//!
//! All three produce the same distance map:
//! - `queue`: sequential FIFO loop
//! - `layered`: frontier-by-frontier expansion
//! - `channel`: a background worker draining a bounded channel

pub mod channel;
pub mod layered;
pub mod queue;


pub use channel::channel_traverse;
pub use layered::layered_traverse;
pub use queue::queue_traverse;

use crate::error::Result;
use crate::graph::{AdjacencyList, DistanceMap, NodeId, Strategy};

/// Compute hop distances from `root` with the chosen strategy.
///
/// `root` must be a valid node of `graph`.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn traverse_with<G>(graph: &G, root: NodeId, strategy: Strategy) -> Result<DistanceMap>
where
    G: AdjacencyList + Sync + ?Sized,
{
    let distances = match strategy {
        Strategy::Queue => queue_traverse(graph, root),
        Strategy::Layered => layered_traverse(graph, root),
        Strategy::Channel => channel_traverse(graph, root)?,
    };

    tracing::debug!(
        reachable = distances.len(),
        max_distance = distances.max_distance(),
        "traversal_complete"
    );
    Ok(distances)
}
