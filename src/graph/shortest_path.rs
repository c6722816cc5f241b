//! Single-source shortest paths over the weight matrix (Dijkstra).

use crate::types::{GraphResult, ShortestPaths};

use super::MatrixGraph;

/// Dijkstra's algorithm in its dense O(V²) form.
///
/// Each round settles the unsettled vertex with the smallest known distance,
/// lowest index first on ties, then relaxes its outgoing edges. Weights are
/// unsigned, so the result is always correct. Distances are summed in `u64`.
pub fn dijkstra(graph: &MatrixGraph, start: usize) -> GraphResult<ShortestPaths> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut settled = vec![false; n];
    distances[start] = Some(0);

    for _ in 0..n.saturating_sub(1) {
        let Some((u, dist_u)) = closest_unsettled(&distances, &settled) else {
            // Everything left is unreachable and can never be relaxed.
            break;
        };
        settled[u] = true;

        for (v, &weight) in graph.matrix_row(u).iter().enumerate() {
            if weight == 0 || settled[v] {
                continue;
            }
            let candidate = dist_u + u64::from(weight);
            if distances[v].map_or(true, |current| candidate < current) {
                distances[v] = Some(candidate);
            }
        }
    }

    let result = ShortestPaths { start, distances };
    log::debug!(
        "dijkstra from {} reached {} of {} vertices",
        start,
        result.reachable_count(),
        n
    );
    Ok(result)
}

fn closest_unsettled(distances: &[Option<u64>], settled: &[bool]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for (vertex, distance) in distances.iter().enumerate() {
        if settled[vertex] {
            continue;
        }
        if let Some(d) = *distance {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((vertex, d));
            }
        }
    }
    best
}
