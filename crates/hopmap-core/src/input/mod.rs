//! Graph input: JSON documents and interactive prompts

pub mod interactive;
pub mod json;

pub use interactive::read_graph;
pub use json::{from_reader, load_graph, DEFAULT_GRAPH_FILE};
