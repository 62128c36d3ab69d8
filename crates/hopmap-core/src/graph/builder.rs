use crate::error::ValidationError;

use super::types::{Graph, NodeId};
use super::validate::to_node_id;

/// Largest node count the builder will allocate for
pub const MAX_NODES: usize = 1 << 24;

/// Builds a symmetric graph from edge pairs.
///
/// Each edge is recorded in both directions, so the result is undirected by
/// construction. Endpoints are checked as edges are added.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    nodes: Vec<Vec<NodeId>>,
    edges: usize,
}

impl GraphBuilder {
    /// Start a graph with `node_count` isolated nodes.
    ///
    /// Counts above [`MAX_NODES`] are rejected before anything is allocated.
    pub fn new(node_count: usize) -> Result<Self, ValidationError> {
        if node_count > MAX_NODES {
            return Err(ValidationError::NodeCountOutOfRange {
                value: node_count,
                max: MAX_NODES,
            });
        }
        Ok(Self {
            nodes: vec![Vec::new(); node_count],
            edges: 0,
        })
    }

    /// Add the undirected edge `{u, v}`.
    pub fn add_edge(&mut self, u: i64, v: i64) -> Result<&mut Self, ValidationError> {
        let from = self.endpoint(u)?;
        let to = self.endpoint(v)?;
        self.nodes[from].push(to);
        self.nodes[to].push(from);
        self.edges += 1;
        Ok(self)
    }

    /// Finish the graph with the given traversal root.
    pub fn build(self, root: i64) -> Result<Graph, ValidationError> {
        let node_count = self.nodes.len();
        let root = to_node_id(root, node_count)
            .ok_or(ValidationError::RootOutOfRange { root, node_count })?;
        Ok(Graph {
            root,
            nodes: self.nodes,
        })
    }

    fn endpoint(&self, value: i64) -> Result<NodeId, ValidationError> {
        let node_count = self.nodes.len();
        to_node_id(value, node_count).ok_or(ValidationError::EndpointOutOfRange {
            edge: self.edges + 1,
            endpoint: value,
            node_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_limit() {
        let err = GraphBuilder::new(MAX_NODES + 1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NodeCountOutOfRange {
                value: MAX_NODES + 1,
                max: MAX_NODES
            }
        );
        assert!(matches!(
            GraphBuilder::new(usize::MAX),
            Err(ValidationError::NodeCountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_edges_added_both_directions() {
        let mut builder = GraphBuilder::new(3).unwrap();
        builder.add_edge(0, 1).unwrap().add_edge(1, 2).unwrap();
        let graph = builder.build(0).unwrap();
        assert_eq!(graph.nodes, vec![vec![1], vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_endpoint_out_of_range_names_edge() {
        let mut builder = GraphBuilder::new(2).unwrap();
        builder.add_edge(0, 1).unwrap();
        let err = builder.add_edge(1, 7).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EndpointOutOfRange {
                edge: 2,
                endpoint: 7,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_failed_edge_leaves_graph_unchanged() {
        let mut builder = GraphBuilder::new(2).unwrap();
        assert!(builder.add_edge(0, -1).is_err());
        let graph = builder.build(1).unwrap();
        assert_eq!(graph.nodes, vec![Vec::<NodeId>::new(), Vec::new()]);
    }

    #[test]
    fn test_build_rejects_bad_root() {
        let err = GraphBuilder::new(3).unwrap().build(3).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RootOutOfRange {
                root: 3,
                node_count: 3
            }
        );
    }

    #[test]
    fn test_self_loop_recorded_twice() {
        let mut builder = GraphBuilder::new(1).unwrap();
        builder.add_edge(0, 0).unwrap();
        assert_eq!(builder.build(0).unwrap().nodes, vec![vec![0, 0]]);
    }
}
