//! Single-source shortest distance results.

use serde::Serialize;

/// Shortest distances from one start vertex to every vertex of a graph.
///
/// `None` marks a vertex with no path from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// The source vertex (0-based).
    pub start: usize,
    /// Distance per vertex, indexed by vertex.
    pub distances: Vec<Option<u64>>,
}

impl ShortestPaths {
    /// Distance to `vertex`, or `None` if unreachable or out of range.
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Whether a path from the start to `vertex` exists.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the start, including the start itself.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Iterate `(vertex, distance)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<u64>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True when the result covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
