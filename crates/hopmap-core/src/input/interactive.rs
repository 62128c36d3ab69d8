//! Interactive graph entry
//!
//! Asks for the node count, the edge count, each edge as a pair of node ids
//! and finally the root. Every answer is one line. Edges are added in both
//! directions.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::bail_invalid;
use crate::error::{HopmapError, Result};
use crate::graph::{Graph, GraphBuilder};

/// Read a graph by prompting on `prompts` and reading answers from `input`.
#[tracing::instrument(skip_all)]
pub fn read_graph<R, W>(input: R, prompts: W) -> Result<Graph>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(input, prompts);

    let node_count: usize = session.ask_number("Nb nodes: ", "node count")?;
    let edge_count: usize = session.ask_number("Nb edges: ", "edge count")?;

    let mut builder = GraphBuilder::new(node_count)?;
    for i in 1..=edge_count {
        let (u, v) = session.ask_edge(i)?;
        builder.add_edge(u, v)?;
    }

    let root: i64 = session.ask_number("Root node: ", "root node")?;
    let graph = builder.build(root)?;

    tracing::debug!(nodes = node_count, edges = edge_count, root, "graph_entered");
    Ok(graph)
}

/// One prompt/answer exchange at a time.
struct Session<R, W> {
    input: R,
    prompts: W,
    line: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, prompts: W) -> Self {
        Self {
            input,
            prompts,
            line: String::new(),
        }
    }

    /// Write `prompt` and return the trimmed answer.
    fn ask(&mut self, prompt: &str, expected: &str) -> Result<&str> {
        write!(self.prompts, "{prompt}")?;
        self.prompts.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(HopmapError::unexpected_eof(expected));
        }
        Ok(self.line.trim())
    }

    fn ask_number<T: FromStr>(&mut self, prompt: &str, context: &str) -> Result<T> {
        let answer = self.ask(prompt, context)?;
        match answer.parse() {
            Ok(value) => Ok(value),
            Err(_) => bail_invalid!(context, format!("{answer:?}")),
        }
    }

    fn ask_edge(&mut self, index: usize) -> Result<(i64, i64)> {
        let context = format!("edge {index}");
        let answer = self.ask(&format!("Edge {index}: "), &context)?;

        let mut parts = answer.split_whitespace();
        let endpoints = match (parts.next(), parts.next(), parts.next()) {
            (Some(u), Some(v), None) => u.parse().ok().zip(v.parse().ok()),
            _ => None,
        };
        match endpoints {
            Some(edge) => Ok(edge),
            None => bail_invalid!(&context, format!("{answer:?} (expected two node ids)")),
        }
    }
}
