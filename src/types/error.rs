//! Error types for the matrix-graph library.

use thiserror::Error;

/// All errors that can occur in the matrix-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Backing storage for the graph or an adjacency list could not be reserved.
    #[error("Memory allocation failed while building the graph")]
    Allocation,

    /// A vertex index outside `[0, count)`.
    #[error("Vertex {vertex} out of range for a graph with {count} vertices")]
    InvalidVertex { vertex: usize, count: usize },

    /// Vertex count exceeds the supported maximum.
    #[error("Too many vertices: {count} > {max}")]
    TooManyVertices { count: usize, max: usize },

    /// Matrix has the wrong number of rows.
    #[error("Matrix has {got} rows, expected {expected}")]
    RowCount { expected: usize, got: usize },

    /// Matrix row is not `expected` entries wide.
    #[error("Matrix row {row} has {got} entries, expected {expected}")]
    MatrixShape {
        expected: usize,
        row: usize,
        got: usize,
    },

    /// The matrix text could not be parsed.
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::collections::TryReserveError> for GraphError {
    fn from(_: std::collections::TryReserveError) -> Self {
        GraphError::Allocation
    }
}

/// Convenience result type for matrix-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
