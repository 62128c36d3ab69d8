//! Index validation for graphs read from untrusted input

use crate::error::ValidationError;

use super::types::{Graph, NodeId, RawGraph, SymmetryPolicy};

/// Validate a decoded graph, trusting its adjacency lists to be symmetric.
pub fn validate(raw: RawGraph) -> Result<Graph, ValidationError> {
    validate_with(raw, SymmetryPolicy::Trust)
}

/// Validate a decoded graph under the given symmetry policy.
///
/// The root is checked first, then each adjacency entry in node order, so
/// the reported problem is always the first one encountered.
#[tracing::instrument(skip(raw), fields(root = raw.root, nodes = raw.nodes.len()))]
pub fn validate_with(raw: RawGraph, policy: SymmetryPolicy) -> Result<Graph, ValidationError> {
    let node_count = raw.nodes.len();

    let root = to_node_id(raw.root, node_count)
        .ok_or(ValidationError::RootOutOfRange {
            root: raw.root,
            node_count,
        })?;

    let mut nodes = Vec::with_capacity(node_count);
    for (node, entries) in raw.nodes.iter().enumerate() {
        let mut neighbors = Vec::with_capacity(entries.len());
        for (position, &target) in entries.iter().enumerate() {
            let neighbor =
                to_node_id(target, node_count).ok_or(ValidationError::EdgeOutOfRange {
                    node,
                    position,
                    target,
                    node_count,
                })?;
            neighbors.push(neighbor);
        }
        nodes.push(neighbors);
    }

    if policy == SymmetryPolicy::Enforce {
        check_symmetric(&nodes)?;
    }

    tracing::debug!(root, nodes = node_count, "graph_valid");
    Ok(Graph { root, nodes })
}

/// Check that every adjacency entry has its reverse entry.
pub fn check_symmetric(nodes: &[Vec<NodeId>]) -> Result<(), ValidationError> {
    for (from, neighbors) in nodes.iter().enumerate() {
        for &to in neighbors {
            if !nodes[to].contains(&from) {
                return Err(ValidationError::Asymmetric { from, to });
            }
        }
    }
    Ok(())
}

pub(super) fn to_node_id(value: i64, node_count: usize) -> Option<NodeId> {
    usize::try_from(value).ok().filter(|&id| id < node_count)
}
