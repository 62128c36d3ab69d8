use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HopmapError;

/// Node identifier: an index into the adjacency lists
pub type NodeId = usize;

/// Graph as it appears on the wire, before validation.
///
/// Integers are signed so that negative ids can be reported as
/// validation errors instead of decode errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawGraph {
    pub root: i64,
    pub nodes: Vec<Vec<i64>>,
}

/// A validated graph with its traversal root.
///
/// `nodes[i]` lists the neighbours of node `i`. Every id in `nodes` and the
/// root are in `0..nodes.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub root: NodeId,
    pub nodes: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Number of adjacency entries across all nodes
    pub fn entry_count(&self) -> usize {
        self.nodes.iter().map(Vec::len).sum()
    }

    /// Hop distances from this graph's root
    pub fn distances(&self, strategy: Strategy) -> crate::error::Result<DistanceMap> {
        super::traverse_with(self, self.root, strategy)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root={} nodes={:?}", self.root, self.nodes)
    }
}

/// Hop distance from the root for every reachable node.
///
/// Equality compares the set of `(node, distance)` pairs; iteration order is
/// unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMap(HashMap<NodeId, usize>);

impl DistanceMap {
    /// A map holding only `root` at distance 0
    pub fn with_root(root: NodeId) -> Self {
        let mut map = HashMap::new();
        map.insert(root, 0);
        DistanceMap(map)
    }

    pub fn get(&self, node: NodeId) -> Option<usize> {
        self.0.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Pairs with `len`; a map built by traversal always holds its root.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.0.iter().map(|(&node, &dist)| (node, dist))
    }

    /// Record `node` at `distance` unless it was already discovered.
    /// Returns true when the node is new.
    pub fn discover(&mut self, node: NodeId, distance: usize) -> bool {
        match self.0.entry(node) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(distance);
                true
            }
        }
    }

    /// Entries in ascending node order
    pub fn sorted(&self) -> Vec<(NodeId, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries
    }

    /// Largest hop count in the map (the eccentricity of the root within its component)
    pub fn max_distance(&self) -> usize {
        self.0.values().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for DistanceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (node, dist)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}: {dist}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(NodeId, usize)> for DistanceMap {
    fn from_iter<I: IntoIterator<Item = (NodeId, usize)>>(iter: I) -> Self {
        DistanceMap(iter.into_iter().collect())
    }
}

/// Shape of the BFS loop. Every strategy yields the same distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sequential FIFO queue
    #[default]
    Queue,
    /// Frontier-by-frontier expansion
    Layered,
    /// Background worker draining a bounded channel
    Channel,
}

impl FromStr for Strategy {
    type Err = HopmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "queue" => Ok(Strategy::Queue),
            "layered" => Ok(Strategy::Layered),
            "channel" => Ok(Strategy::Channel),
            other => Err(HopmapError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Queue => write!(f, "queue"),
            Strategy::Layered => write!(f, "layered"),
            Strategy::Channel => write!(f, "channel"),
        }
    }
}

/// How validation treats one-way adjacency entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryPolicy {
    /// Accept the lists as given; a one-way entry is followed in its direction only
    #[default]
    Trust,
    /// Reject any `j ∈ nodes[i]` without a matching `i ∈ nodes[j]`
    Enforce,
}
