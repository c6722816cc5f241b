//! All data types for the matrix-graph library.

pub mod distance;
pub mod error;

pub use distance::ShortestPaths;
pub use error::{GraphError, GraphResult};

/// Edge weight as stored in the adjacency matrix. `0` means "no edge".
pub type Weight = u32;

/// Largest vertex count a graph may be built with.
pub const MAX_VERTICES: usize = 100;
