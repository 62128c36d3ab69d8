//! JSON graph documents
//!
//! The expected shape is
//! ```json
//! {
//!     "root": 0,
//!     "nodes": [[1, 3], [0, 2], [1, 3], [0, 2]]
//! }
//! ```
//! where `nodes[i]` lists the neighbours of node `i`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use crate::error::{HopmapError, Result};
use crate::graph::{validate_with, Graph, RawGraph, SymmetryPolicy};
use crate::trace_time;

/// File read when no path is given
pub const DEFAULT_GRAPH_FILE: &str = "graph.json";

/// Decode a graph document without validating it.
pub fn from_reader<R: Read>(reader: R) -> Result<RawGraph> {
    Ok(serde_json::from_reader(reader)?)
}

/// Open, decode and validate the graph stored at `path`.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path, policy: SymmetryPolicy) -> Result<Graph> {
    let start = Instant::now();

    let file =
        File::open(path).map_err(|e| HopmapError::io_operation("open", path.display(), e))?;
    let raw = from_reader(BufReader::new(file))?;
    trace_time!(start, "decode_graph");

    let graph = validate_with(raw, policy)?;
    trace_time!(start, "load_graph", nodes = graph.nodes.len());
    Ok(graph)
}
