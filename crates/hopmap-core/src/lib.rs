//! Hopmap Core Library
//!
//! Graph types, input validation and breadth-first traversal for the
//! hopmap CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
