//! Phase 1 tests: Graph store construction and accessors.

use matrix_graph::graph::{GraphBuilder, MatrixGraph};
use matrix_graph::types::error::GraphError;
use matrix_graph::types::MAX_VERTICES;

// ==================== Helper ====================

/// Undirected square: 0-1, 0-2, 1-3, 2-3.
fn square() -> MatrixGraph {
    MatrixGraph::build(
        4,
        vec![
            vec![0, 1, 1, 0],
            vec![1, 0, 0, 1],
            vec![1, 0, 0, 1],
            vec![0, 1, 1, 0],
        ],
    )
    .unwrap()
}

// ==================== Construction Tests ====================

#[test]
fn test_build_counts() {
    let graph = square();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 8);
    assert!(!graph.is_empty());
}

#[test]
fn test_neighbors_descending_column_order() {
    let graph = square();
    assert_eq!(graph.neighbors(0), &[2, 1]);
    assert_eq!(graph.neighbors(1), &[3, 0]);
    assert_eq!(graph.neighbors(2), &[3, 0]);
    assert_eq!(graph.neighbors(3), &[2, 1]);
}

#[test]
fn test_neighbors_match_nonzero_entries() {
    let graph = MatrixGraph::build(
        3,
        vec![vec![0, 7, 3], vec![0, 0, 0], vec![4, 0, 9]],
    )
    .unwrap();
    assert_eq!(graph.neighbors(0), &[2, 1]);
    assert!(graph.neighbors(1).is_empty());
    assert_eq!(graph.neighbors(2), &[2, 0]);
}

#[test]
fn test_weight_lookup() {
    let graph = MatrixGraph::build(2, vec![vec![0, 5], vec![0, 0]]).unwrap();
    assert_eq!(graph.weight(0, 1), Some(5));
    assert_eq!(graph.weight(1, 0), None);
    assert_eq!(graph.weight(0, 0), None);
    assert_eq!(graph.weight(2, 0), None);
    assert_eq!(graph.matrix_row(0), &[0, 5]);
}

#[test]
fn test_empty_graph() {
    let graph = MatrixGraph::build(0, vec![]).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
    assert!(graph.is_symmetric());
}

#[test]
#[should_panic(expected = "out of range")]
fn test_matrix_row_on_empty_graph_panics() {
    let graph = MatrixGraph::build(0, vec![]).unwrap();
    graph.matrix_row(0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_matrix_row_past_last_vertex_panics() {
    let graph = square();
    graph.matrix_row(4);
}

#[test]
fn test_self_loop_in_adjacency() {
    let graph = MatrixGraph::build(2, vec![vec![1, 1], vec![0, 0]]).unwrap();
    assert_eq!(graph.neighbors(0), &[1, 0]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_symmetry_detection() {
    assert!(square().is_symmetric());
    let directed = MatrixGraph::build(2, vec![vec![0, 1], vec![0, 0]]).unwrap();
    assert!(!directed.is_symmetric());
    let unequal = MatrixGraph::build(2, vec![vec![0, 1], vec![2, 0]]).unwrap();
    assert!(!unequal.is_symmetric());
}

#[test]
fn test_from_flat_matches_build() {
    let flat = MatrixGraph::from_flat(2, vec![0, 3, 4, 0]).unwrap();
    let rows = MatrixGraph::build(2, vec![vec![0, 3], vec![4, 0]]).unwrap();
    assert_eq!(flat, rows);
}

// ==================== Validation Tests ====================

#[test]
fn test_too_many_vertices_rejected() {
    let n = MAX_VERTICES + 1;
    let result = MatrixGraph::build(n, vec![vec![0; n]; n]);
    match result.unwrap_err() {
        GraphError::TooManyVertices { count, max } => {
            assert_eq!(count, n);
            assert_eq!(max, MAX_VERTICES);
        }
        e => panic!("Expected TooManyVertices error, got {:?}", e),
    }
}

#[test]
fn test_max_vertices_accepted() {
    let n = MAX_VERTICES;
    let graph = MatrixGraph::build(n, vec![vec![0; n]; n]).unwrap();
    assert_eq!(graph.vertex_count(), MAX_VERTICES);
}

#[test]
fn test_row_count_mismatch() {
    let result = MatrixGraph::build(3, vec![vec![0, 0, 0]]);
    match result.unwrap_err() {
        GraphError::RowCount { expected, got } => {
            assert_eq!(expected, 3);
            assert_eq!(got, 1);
        }
        e => panic!("Expected RowCount error, got {:?}", e),
    }
}

#[test]
fn test_ragged_row_rejected() {
    let result = MatrixGraph::build(2, vec![vec![0, 1], vec![0]]);
    match result.unwrap_err() {
        GraphError::MatrixShape { expected, row, got } => {
            assert_eq!(expected, 2);
            assert_eq!(row, 1);
            assert_eq!(got, 1);
        }
        e => panic!("Expected MatrixShape error, got {:?}", e),
    }
}

#[test]
fn test_from_flat_short_input() {
    let result = MatrixGraph::from_flat(2, vec![0, 1, 0]);
    assert!(matches!(
        result,
        Err(GraphError::MatrixShape {
            row: 1,
            got: 1,
            ..
        })
    ));
}

#[test]
fn test_check_vertex() {
    let graph = square();
    assert!(graph.check_vertex(3).is_ok());
    match graph.check_vertex(4).unwrap_err() {
        GraphError::InvalidVertex { vertex, count } => {
            assert_eq!(vertex, 4);
            assert_eq!(count, 4);
        }
        e => panic!("Expected InvalidVertex error, got {:?}", e),
    }
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_matches_matrix() {
    let built = GraphBuilder::new(4)
        .undirected_edge(0, 1, 1)
        .undirected_edge(0, 2, 1)
        .undirected_edge(1, 3, 1)
        .undirected_edge(2, 3, 1)
        .build()
        .unwrap();
    assert_eq!(built, square());
}

#[test]
fn test_builder_last_weight_wins() {
    let graph = GraphBuilder::new(2)
        .edge(0, 1, 4)
        .edge(0, 1, 9)
        .build()
        .unwrap();
    assert_eq!(graph.weight(0, 1), Some(9));

    let removed = GraphBuilder::new(2)
        .edge(0, 1, 4)
        .edge(0, 1, 0)
        .build()
        .unwrap();
    assert_eq!(removed.edge_count(), 0);
}

#[test]
fn test_builder_rejects_out_of_range_endpoint() {
    let result = GraphBuilder::new(2).edge(0, 2, 1).build();
    assert!(matches!(
        result,
        Err(GraphError::InvalidVertex {
            vertex: 2,
            count: 2
        })
    ));
}
