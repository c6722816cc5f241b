//! matrix-graph — weighted graphs loaded from dense adjacency matrices.
//!
//! A [`MatrixGraph`] keeps the input weight matrix and a derived adjacency
//! list per vertex. Breadth-first and depth-first traversals walk the
//! adjacency lists; Dijkstra's shortest paths read the matrix directly.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{MatrixReader, MatrixWriter};
pub use graph::{bfs, dfs, dijkstra, traverse, GraphBuilder, MatrixGraph, TraversalKind};
pub use types::{GraphError, GraphResult, ShortestPaths, Weight, MAX_VERTICES};
