//! Core graph structure — weight matrix plus derived adjacency lists.

use crate::types::{GraphError, GraphResult, Weight, MAX_VERTICES};

/// A weighted graph loaded from a dense adjacency matrix.
///
/// The graph is read-only once built. The weight matrix is kept for
/// shortest-path queries; the adjacency lists drive the traversals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    /// Number of vertices.
    vertex_count: usize,
    /// Row-major `vertex_count * vertex_count` weights. `0` = no edge.
    weights: Vec<Weight>,
    /// Neighbors per vertex, highest column first.
    adjacency: Vec<Vec<usize>>,
    /// Total number of nonzero matrix entries.
    edge_count: usize,
}

impl MatrixGraph {
    /// Build a graph from a square matrix given as rows.
    pub fn build(vertex_count: usize, matrix: Vec<Vec<Weight>>) -> GraphResult<Self> {
        check_vertex_limit(vertex_count)?;
        if matrix.len() != vertex_count {
            return Err(GraphError::RowCount {
                expected: vertex_count,
                got: matrix.len(),
            });
        }
        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != vertex_count {
                return Err(GraphError::MatrixShape {
                    expected: vertex_count,
                    row,
                    got: cells.len(),
                });
            }
        }

        let mut weights: Vec<Weight> = Vec::new();
        weights.try_reserve_exact(vertex_count * vertex_count)?;
        for row in matrix {
            weights.extend(row);
        }

        Self::from_weights(vertex_count, weights)
    }

    /// Build a graph from a flat row-major list of `vertex_count * vertex_count` weights.
    pub fn from_flat(vertex_count: usize, cells: Vec<Weight>) -> GraphResult<Self> {
        check_vertex_limit(vertex_count)?;
        let expected = vertex_count * vertex_count;
        if cells.len() != expected {
            if vertex_count == 0 || cells.len() > expected {
                return Err(GraphError::RowCount {
                    expected: vertex_count,
                    got: cells.len().div_ceil(vertex_count.max(1)),
                });
            }
            // Report the first row that comes up short.
            return Err(GraphError::MatrixShape {
                expected: vertex_count,
                row: cells.len() / vertex_count,
                got: cells.len() % vertex_count,
            });
        }
        Self::from_weights(vertex_count, cells)
    }

    fn from_weights(vertex_count: usize, weights: Vec<Weight>) -> GraphResult<Self> {
        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;

        let mut edge_count = 0;
        for u in 0..vertex_count {
            let row = &weights[u * vertex_count..(u + 1) * vertex_count];
            let degree = row.iter().filter(|&&w| w != 0).count();

            let mut neighbors: Vec<usize> = Vec::new();
            neighbors.try_reserve_exact(degree)?;
            // Each discovered edge goes to the front of the list, so the
            // final order is descending by column.
            neighbors.extend(
                row.iter()
                    .enumerate()
                    .rev()
                    .filter(|&(_, &w)| w != 0)
                    .map(|(v, _)| v),
            );

            edge_count += degree;
            adjacency.push(neighbors);
        }

        log::debug!(
            "built graph: {} vertices, {} edges",
            vertex_count,
            edge_count
        );

        Ok(Self {
            vertex_count,
            weights,
            adjacency,
            edge_count,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of directed edges (nonzero matrix entries, self-loops included).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True for a graph with no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Whether `vertex` is a valid index.
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    /// Fail with `InvalidVertex` unless `vertex` is a valid index.
    pub fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                count: self.vertex_count,
            })
        }
    }

    /// Neighbors of `vertex` in adjacency-list order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range; use [`check_vertex`](Self::check_vertex) first.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Weight of the edge `source -> target`, or `None` when there is no such edge
    /// or either index is out of range.
    pub fn weight(&self, source: usize, target: usize) -> Option<Weight> {
        if source >= self.vertex_count || target >= self.vertex_count {
            return None;
        }
        match self.weights[source * self.vertex_count + target] {
            0 => None,
            w => Some(w),
        }
    }

    /// The matrix row for `vertex`, zeros included.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn matrix_row(&self, vertex: usize) -> &[Weight] {
        assert!(
            vertex < self.vertex_count,
            "vertex {} out of range for {} vertices",
            vertex,
            self.vertex_count
        );
        &self.weights[vertex * self.vertex_count..(vertex + 1) * self.vertex_count]
    }

    /// Iterate over matrix rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        (0..self.vertex_count).map(move |v| self.matrix_row(v))
    }

    /// Whether `weight(u, v) == weight(v, u)` for every pair, i.e. the graph is undirected.
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count;
        (0..n).all(|u| (u + 1..n).all(|v| self.weights[u * n + v] == self.weights[v * n + u]))
    }
}

fn check_vertex_limit(vertex_count: usize) -> GraphResult<()> {
    if vertex_count > MAX_VERTICES {
        return Err(GraphError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}
