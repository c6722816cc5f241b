//! Graph traversal algorithms (BFS, DFS).

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::GraphResult;

use super::MatrixGraph;

/// Which traversal order to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    /// Breadth-first, level by level.
    Breadth,
    /// Depth-first pre-order.
    Depth,
}

impl TraversalKind {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
        }
    }
}

impl std::fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run the traversal selected by `kind` from `start`.
pub fn traverse(graph: &MatrixGraph, start: usize, kind: TraversalKind) -> GraphResult<Vec<usize>> {
    match kind {
        TraversalKind::Breadth => bfs(graph, start),
        TraversalKind::Depth => dfs(graph, start),
    }
}

/// BFS traversal from a starting vertex, following adjacency-list order.
///
/// Returns every vertex reachable from `start` exactly once, in visit order.
pub fn bfs(graph: &MatrixGraph, start: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut visited_order: Vec<usize> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    // Marked on enqueue so a vertex reachable over several edges is queued once.
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visited_order.push(current);

        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "bfs from {} visited {} of {} vertices",
        start,
        visited_order.len(),
        graph.vertex_count()
    );
    Ok(visited_order)
}

/// DFS pre-order traversal from a starting vertex.
///
/// Produces the same order as the recursive formulation, using an explicit
/// stack of `(vertex, next neighbor position)` frames.
pub fn dfs(graph: &MatrixGraph, start: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut visited_order: Vec<usize> = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    visited[start] = true;
    visited_order.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (vertex, position) = *frame;
        let neighbors = graph.neighbors(vertex);

        let Some(offset) = neighbors[position..].iter().position(|&n| !visited[n]) else {
            stack.pop();
            continue;
        };

        let next = neighbors[position + offset];
        frame.1 = position + offset + 1;

        visited[next] = true;
        visited_order.push(next);
        stack.push((next, 0));
    }

    log::debug!(
        "dfs from {} visited {} of {} vertices",
        start,
        visited_order.len(),
        graph.vertex_count()
    );
    Ok(visited_order)
}
