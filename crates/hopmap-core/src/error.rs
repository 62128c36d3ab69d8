//! Error types and exit codes for hopmap
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, malformed JSON, config)
//! - 2: Usage error (bad flags, bad interactive answers)
//! - 3: Data error (graph failed validation)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes reported by the hopmap binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args/input (2)
    Usage = 2,
    /// Data error - graph failed validation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// A graph that cannot be traversed safely.
///
/// Traversal assumes every index it touches is in range, so these are
/// reported before any traversal starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("root must point to an existing node (root {root}, graph has {node_count} nodes)")]
    RootOutOfRange { root: i64, node_count: usize },

    #[error(
        "edges must point to an existing node (node {node} entry {position} references {target}, graph has {node_count} nodes)"
    )]
    EdgeOutOfRange {
        node: NodeId,
        position: usize,
        target: i64,
        node_count: usize,
    },

    #[error(
        "edges must point to an existing node (edge {edge} endpoint {endpoint}, graph has {node_count} nodes)"
    )]
    EndpointOutOfRange {
        edge: usize,
        endpoint: i64,
        node_count: usize,
    },

    #[error("node count {value} is too large (at most {max} nodes)")]
    NodeCountOutOfRange { value: usize, max: usize },

    #[error("adjacency is not symmetric: {from} lists {to} but {to} does not list {from}")]
    Asymmetric { from: NodeId, to: NodeId },
}

/// Errors that can occur during hopmap operations
#[derive(Error, Debug)]
pub enum HopmapError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: queue, layered, or channel)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidInput { context: String, value: String },

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {0}")]
    Validation(#[from] ValidationError),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("traversal worker exited without signalling completion")]
    WorkerLost,

    #[error("{0}")]
    Other(String),
}

impl HopmapError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        HopmapError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a value that could not be understood
    pub fn invalid_input(context: &str, value: impl std::fmt::Display) -> Self {
        HopmapError::InvalidInput {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for input that ended before `expected` was read
    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        HopmapError::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            HopmapError::UnknownFormat(_)
            | HopmapError::UnknownStrategy(_)
            | HopmapError::UsageError(_)
            | HopmapError::InvalidInput { .. }
            | HopmapError::UnexpectedEof { .. } => ExitCode::Usage,

            // Data errors
            HopmapError::Validation(_) => ExitCode::Data,

            // Generic failures
            HopmapError::Io(_)
            | HopmapError::Json(_)
            | HopmapError::Toml(_)
            | HopmapError::FailedOperationWithTarget { .. }
            | HopmapError::WorkerLost
            | HopmapError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            HopmapError::UnknownFormat(_) => "unknown_format",
            HopmapError::UnknownStrategy(_) => "unknown_strategy",
            HopmapError::UsageError(_) => "usage_error",
            HopmapError::InvalidInput { .. } => "invalid_input",
            HopmapError::UnexpectedEof { .. } => "unexpected_eof",
            HopmapError::Validation(_) => "validation_error",
            HopmapError::Io(_) => "io_error",
            HopmapError::Json(_) => "json_error",
            HopmapError::Toml(_) => "toml_error",
            HopmapError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            HopmapError::WorkerLost => "worker_lost",
            HopmapError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hopmap operations
pub type Result<T> = std::result::Result<T, HopmapError>;
