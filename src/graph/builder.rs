//! Fluent API for building MatrixGraph instances.

use crate::types::{GraphError, GraphResult, Weight};

use super::MatrixGraph;

/// Fluent builder for constructing a MatrixGraph edge by edge.
///
/// Setting the same edge twice keeps the last weight; a weight of `0` removes it.
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize, Weight)>,
}

impl GraphBuilder {
    /// Create a builder for a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Add a directed edge.
    pub fn edge(&mut self, source: usize, target: usize, weight: Weight) -> &mut Self {
        self.edges.push((source, target, weight));
        self
    }

    /// Add an edge in both directions.
    pub fn undirected_edge(&mut self, a: usize, b: usize, weight: Weight) -> &mut Self {
        self.edges.push((a, b, weight));
        self.edges.push((b, a, weight));
        self
    }

    /// Build the final MatrixGraph.
    pub fn build(&self) -> GraphResult<MatrixGraph> {
        let n = self.vertex_count;
        let mut matrix = vec![vec![0; n]; n];
        for &(source, target, weight) in &self.edges {
            for vertex in [source, target] {
                if vertex >= n {
                    return Err(GraphError::InvalidVertex { vertex, count: n });
                }
            }
            matrix[source][target] = weight;
        }
        MatrixGraph::build(n, matrix)
    }
}
