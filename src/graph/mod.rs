//! In-memory graph operations — the core data structure and its algorithms.

pub mod builder;
pub mod matrix_graph;
pub mod shortest_path;
pub mod traversal;

pub use builder::GraphBuilder;
pub use matrix_graph::MatrixGraph;
pub use shortest_path::dijkstra;
pub use traversal::{bfs, dfs, traverse, TraversalKind};
