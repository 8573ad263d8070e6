use beluga_graph::{Error, Graph, GraphBuilder, LabelMap, MalformedGraph, Predecessors, alg};

fn triangle() -> Graph {
    Graph::new(vec![0, 1, 2, 3], vec![1, 2, 0], LabelMap::ordinals(3)).unwrap()
}

#[test]
fn new_accepts_a_well_formed_triangle() {
    let g = triangle();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.successors(0), &[1]);
    assert_eq!(g.label(2), Some("2"));
    assert_eq!(g.labels().ordinal("1"), Some(1));
}

#[test]
fn new_rejects_out_of_range_column_with_length_mismatch() {
    let err = Graph::new(vec![0, 2, 2], vec![5], LabelMap::ordinals(2)).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGraph(MalformedGraph::EdgeCountMismatch { last: 2, edges: 1 })
    ));
}

#[test]
fn new_rejects_out_of_range_column() {
    let err = Graph::new(vec![0, 1, 1], vec![5], LabelMap::ordinals(2)).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGraph(MalformedGraph::ColumnOutOfRange {
            edge: 0,
            target: 5,
            vertices: 2
        })
    ));
}

#[test]
fn new_rejects_decreasing_offsets() {
    let err = Graph::new(vec![0, 2, 1], vec![0, 1], LabelMap::ordinals(2)).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGraph(MalformedGraph::OffsetsNotMonotonic { vertex: 1, .. })
    ));
}

#[test]
fn new_rejects_offsets_that_do_not_match_label_count() {
    let err = Graph::new(vec![0, 1], vec![0], LabelMap::ordinals(2)).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGraph(MalformedGraph::OffsetsLength {
            offsets: 2,
            expected: 3
        })
    ));

    let err = Graph::new(vec![1, 1], vec![0], LabelMap::ordinals(1)).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGraph(MalformedGraph::OffsetsStart { first: 1 })
    ));
}

#[test]
fn label_map_rejects_duplicates() {
    let err = LabelMap::new(vec!["a".into(), "b".into(), "a".into()]).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGraph(MalformedGraph::DuplicateLabel { ref label }) if label == "a"
    ));
}

#[test]
fn label_map_rejects_labels_with_format_tokens() {
    let err = LabelMap::new(vec!["a".into(), "b->c".into()]).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedGraph(MalformedGraph::UnrepresentableLabel { ref label }) if label == "b->c"
    ));
    assert!(LabelMap::new(vec!["a b".into(), "c#".into(), "d-e".into()]).is_ok());
}

#[test]
fn from_successors_builds_one_out_edge_per_vertex() {
    let g = Graph::from_successors(&[2, 0, 1]).unwrap();
    assert_eq!(g.row_offsets(), &[0, 1, 2, 3]);
    assert_eq!(g.col_indices(), &[2, 0, 1]);
    for v in 0..3 {
        assert_eq!(g.out_degree(v), 1);
    }
    assert!(Graph::from_successors(&[3, 0, 1]).is_err());
}

#[test]
fn edge_source_skips_vertices_without_out_edges() {
    // 0 -> 1, 0 -> 2, (1 has none), 2 -> 0
    let g = Graph::new(vec![0, 2, 2, 3], vec![1, 2, 0], LabelMap::ordinals(3)).unwrap();
    assert_eq!(g.edge_source(0), 0);
    assert_eq!(g.edge_source(1), 0);
    assert_eq!(g.edge_source(2), 2);
    assert_eq!(g.edge_sources(), vec![0, 0, 2]);
    assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (2, 0)]);
}

#[test]
fn reverse_preserves_degrees_and_flips_edges() {
    let mut b = GraphBuilder::new();
    b.add_edge("a", "b")
        .add_edge("a", "c")
        .add_edge("b", "a")
        .add_edge("c", "a")
        .add_edge("c", "c");
    let g = b.build().unwrap();
    let r = g.reverse();

    let in_deg = g.in_degrees();
    for v in 0..g.vertex_count() {
        assert_eq!(r.out_degree(v), in_deg[v]);
    }

    let mut forward: Vec<(usize, usize)> = g.edges().map(|(v, w)| (w, v)).collect();
    let mut backward: Vec<(usize, usize)> = r.edges().collect();
    forward.sort();
    backward.sort();
    assert_eq!(forward, backward);
    assert_eq!(r.reverse().edge_multiset(), g.edge_multiset());
}

#[test]
fn predecessors_list_in_edges_in_ascending_order_with_slots() {
    // 0 -> 2, 1 -> 2, 2 -> 0, 2 -> 1
    let g = Graph::new(vec![0, 1, 2, 4], vec![2, 2, 0, 1], LabelMap::ordinals(3)).unwrap();
    let preds = Predecessors::build(&g);
    assert_eq!(preds.offsets(), &[0, 1, 2, 4]);
    assert_eq!(preds.in_edges(2), &[0, 1]);
    assert_eq!(preds.in_edges(0), &[2]);
    assert_eq!(preds.in_degree(2), 2);
    assert_eq!(preds.slot(0), 0);
    assert_eq!(preds.slot(1), 1);
    assert_eq!(preds.slot(3), 0);
}

#[test]
fn first_unbalanced_reports_lowest_vertex() {
    let g = Graph::new(vec![0, 1, 1], vec![1], LabelMap::ordinals(2)).unwrap();
    let u = g.first_unbalanced().unwrap();
    assert_eq!(u.vertex, 0);
    assert_eq!(u.in_degree, 0);
    assert_eq!(u.out_degree, 1);
    assert!(triangle().first_unbalanced().is_none());
}

#[test]
fn weak_connectivity_ignores_isolated_vertices() {
    let mut b = GraphBuilder::new();
    b.add_edge("a", "b").add_edge("b", "a");
    b.add_vertex("lonely");
    let g = b.build().unwrap();
    assert!(alg::is_weakly_connected(&g));
    assert_eq!(alg::components(&g).len(), 2);

    let mut b = GraphBuilder::new();
    b.add_edge("a", "b")
        .add_edge("b", "a")
        .add_edge("c", "d")
        .add_edge("d", "c");
    assert!(!alg::is_weakly_connected(&b.build().unwrap()));
    assert!(alg::is_weakly_connected(&Graph::empty()));
}
