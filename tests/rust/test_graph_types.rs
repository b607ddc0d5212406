use super::*;

#[test]
fn test_from_edges_is_symmetric() {
    let g = Graph::from_edges(3, &[(0, 1), (2, 1)]).unwrap();
    assert_eq!(g.vertex_count(), 3);
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(1, 0));
    assert!(g.has_edge(1, 2));
    assert!(g.has_edge(2, 1));
    assert!(!g.has_edge(0, 2));
}

#[test]
fn test_from_edges_ignores_self_loop() {
    let g = Graph::from_edges(2, &[(1, 1), (0, 1)]).unwrap();
    assert!(!g.has_edge(1, 1));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_from_edges_out_of_range() {
    let err = Graph::from_edges(2, &[(0, 1), (1, 7)]).unwrap_err();
    assert_eq!(err, GraphFormatError::OutOfRange(7));
}

#[test]
fn test_duplicate_edges_count_once() {
    let g = Graph::from_edges(2, &[(0, 1), (1, 0), (0, 1)]).unwrap();
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_edges_in_row_major_order() {
    let g = Graph::from_edges(4, &[(3, 2), (0, 3), (1, 0)]).unwrap();
    let edges: Vec<_> = g.edges().collect();
    assert_eq!(edges, vec![(0, 1), (0, 3), (2, 3)]);
}

#[test]
fn test_neighbors() {
    let g = Graph::from_edges(4, &[(0, 2), (2, 3)]).unwrap();
    assert_eq!(g.neighbors(2), vec![0, 3]);
    assert_eq!(g.neighbors(1), Vec::<VertexId>::new());
    assert!(g.neighbors(9).is_empty());
}

#[test]
fn test_has_edge_out_of_range_is_false() {
    let g = Graph::from_edges(2, &[(0, 1)]).unwrap();
    assert!(!g.has_edge(0, 5));
    assert!(!g.has_edge(5, 0));
}

#[test]
fn test_groups_default_to_zero() {
    let g = Graph::from_edges(3, &[]).unwrap();
    assert_eq!(g.groups(), &[0, 0, 0]);
}

#[test]
fn test_with_groups_later_assignment_wins() {
    let g = Graph::from_edges(3, &[])
        .unwrap()
        .with_groups(&[(1, 1), (2, 2), (1, 2)])
        .unwrap();
    assert_eq!(g.group(0), 0);
    assert_eq!(g.group(1), 2);
    assert_eq!(g.group(2), 2);
}

#[test]
fn test_with_groups_out_of_range() {
    let err = Graph::from_edges(4, &[])
        .unwrap()
        .with_groups(&[(2, 1), (5, 1)])
        .unwrap_err();
    assert_eq!(err, GraphFormatError::OutOfRange(5));
}

#[test]
fn test_from_matrix_symmetrizes_and_clears_diagonal() {
    let rows = vec![
        vec![true, true, false],
        vec![false, false, false],
        vec![true, false, true],
    ];
    let g = Graph::from_matrix(&rows);
    assert!(g.has_edge(1, 0));
    assert!(g.has_edge(0, 2));
    assert!(!g.has_edge(0, 0));
    assert!(!g.has_edge(2, 2));
    assert_eq!(g.edge_count(), 2);
    assert!(g.spatial_hint().is_none());
}

#[test]
fn test_from_grid_keeps_hints() {
    let cells = vec![GridPos::new(0, 0), GridPos::new(3, 1)];
    let g = Graph::from_grid(cells.clone(), &[(0, 1)]).unwrap();
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.spatial_hint(), Some(cells.as_slice()));
}

#[test]
fn test_ensure_non_empty() {
    assert!(Graph::from_edges(1, &[]).unwrap().ensure_non_empty().is_ok());
    let empty = Graph::from_edges(0, &[]).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.ensure_non_empty(), Err(GraphFormatError::EmptyGraph));
}
