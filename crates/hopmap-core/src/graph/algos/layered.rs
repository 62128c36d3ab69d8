use crate::graph::{AdjacencyList, DistanceMap, NodeId};

/// Perform BFS one layer at a time.
///
/// Each pass expands the whole current frontier and collects the next one;
/// the loop ends when a pass discovers nothing.
pub fn layered_traverse<G>(graph: &G, root: NodeId) -> DistanceMap
where
    G: AdjacencyList + ?Sized,
{
    let mut distances = DistanceMap::with_root(root);
    let mut frontier = vec![root];
    let mut depth = 0;

    while !frontier.is_empty() {
        frontier = expand_layer(graph, &frontier, depth + 1, &mut distances);
        depth += 1;
        tracing::trace!(depth, discovered = frontier.len(), "layer");
    }

    distances
}

/// Expand `frontier`, recording new nodes at `depth` and returning them in
/// discovery order.
fn expand_layer<G>(
    graph: &G,
    frontier: &[NodeId],
    depth: usize,
    distances: &mut DistanceMap,
) -> Vec<NodeId>
where
    G: AdjacencyList + ?Sized,
{
    let mut next = Vec::new();
    for &node in frontier {
        for &neighbor in graph.neighbors(node) {
            if distances.discover(neighbor, depth) {
                next.push(neighbor);
            }
        }
    }
    next
}
