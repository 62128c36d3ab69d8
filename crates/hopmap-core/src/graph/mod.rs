//! Graph representation and breadth-first traversal
//!
//! - `types`: graph, distance map and strategy types
//! - `traversal`: the `AdjacencyList` trait traversal runs against
//! - `validate`: index checks that make traversal safe
//! - `builder`: symmetric graph construction from edge pairs
//! - `algos`: the BFS loop in its queue, layered and channel forms

pub mod algos;
pub mod builder;
pub mod traversal;
pub mod types;
pub mod validate;

pub use algos::{channel_traverse, layered_traverse, queue_traverse, traverse_with};
pub use builder::{GraphBuilder, MAX_NODES};
pub use traversal::AdjacencyList;
pub use types::{DistanceMap, Graph, NodeId, RawGraph, Strategy, SymmetryPolicy};
pub use validate::{validate, validate_with};
