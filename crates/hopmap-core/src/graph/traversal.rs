use super::types::{Graph, NodeId};

/// Trait for providing graph adjacency to the traversal algorithms
pub trait AdjacencyList {
    fn node_count(&self) -> usize;

    /// Neighbours of `node`. A node outside the structure has none.
    fn neighbors(&self, node: NodeId) -> &[NodeId];
}

impl AdjacencyList for [Vec<NodeId>] {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map_or(&[], Vec::as_slice)
    }
}

impl AdjacencyList for Vec<Vec<NodeId>> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.as_slice().neighbors(node)
    }
}

impl AdjacencyList for Graph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.nodes.as_slice().neighbors(node)
    }
}
