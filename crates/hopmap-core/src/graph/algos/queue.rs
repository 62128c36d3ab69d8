use std::collections::VecDeque;

use crate::graph::{AdjacencyList, DistanceMap, NodeId};

/// Perform BFS from `root` with a FIFO queue.
///
/// A node's distance is fixed when it is first discovered, so each reachable
/// node is enqueued and expanded exactly once.
pub fn queue_traverse<G>(graph: &G, root: NodeId) -> DistanceMap
where
    G: AdjacencyList + ?Sized,
{
    let mut distances = DistanceMap::with_root(root);
    let mut queue = VecDeque::with_capacity(graph.node_count());
    queue.push_back((root, 0));

    while let Some((current, hops)) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if distances.discover(neighbor, hops + 1) {
                queue.push_back((neighbor, hops + 1));
            }
        }
    }

    distances
}
