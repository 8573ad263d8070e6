use beluga::{
    CircuitOptions, Graph, LabelMap, LinkStrategy, MergeLink, PartitionStrategy, Predecessors,
    Successors, contract, partition_cycles, plan_swips,
};

fn contract_canonical(g: &Graph) -> beluga::CycleGraph {
    let preds = Predecessors::build(g);
    let succ = Successors::from_graph(g, &preds, usize::MAX).unwrap();
    let partition = partition_cycles(&succ, PartitionStrategy::Scan, usize::MAX);
    contract(g, &preds, &partition, &CircuitOptions::sequential())
}

#[test]
fn bowtie_has_one_valid_link_at_the_shared_vertex() {
    let g = Graph::new(
        vec![0, 2, 3, 4, 5, 6],
        vec![1, 3, 2, 0, 4, 0],
        LabelMap::ordinals(5),
    )
    .unwrap();
    let cg = contract_canonical(&g);
    assert_eq!(cg.partitions(), 2);
    assert_eq!(
        cg.links(),
        &[MergeLink {
            p: 0,
            q: 1,
            vertex: 0,
            edges: (3, 5),
            valid: true,
        }]
    );
    assert_eq!(cg.neighbors(0).count(), 1);
    assert_eq!(cg.neighbors(1).next().map(|l| l.other(1)), Some(0));
}

#[test]
fn same_partition_pairs_are_recorded_as_invalid() {
    // 0 -> 1, 0 -> 0, 1 -> 0: a single cycle that passes vertex 0 twice.
    let g = Graph::new(vec![0, 2, 3], vec![1, 0, 0], LabelMap::ordinals(2)).unwrap();
    let cg = contract_canonical(&g);
    assert_eq!(cg.partitions(), 1);
    assert_eq!(cg.links().len(), 1);
    let link = cg.links()[0];
    assert!(!link.valid);
    assert_eq!((link.p, link.q, link.vertex, link.edges), (0, 0, 0, (1, 2)));
    assert_eq!(cg.valid_links().count(), 0);
    assert_eq!(cg.neighbors(0).count(), 0);
}

#[test]
fn duplicate_partition_pairs_keep_the_lowest_vertex() {
    // Two parallel 2-cycles between vertices 0 and 1 meet at both vertices.
    let g = Graph::new(vec![0, 2, 4], vec![1, 1, 0, 0], LabelMap::ordinals(2)).unwrap();
    let cg = contract_canonical(&g);
    assert_eq!(cg.partitions(), 2);
    let valid: Vec<&MergeLink> = cg.valid_links().collect();
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].vertex, 0);
    assert_eq!(valid[0].edges, (2, 3));
}

#[test]
fn three_cycles_at_one_vertex_form_a_triangle_of_links() {
    // Three self-loops on vertex 0 are three separate cycles.
    let g = Graph::new(vec![0, 3], vec![0, 0, 0], LabelMap::ordinals(1)).unwrap();
    let cg = contract_canonical(&g);
    assert_eq!(cg.partitions(), 3);
    let pairs: Vec<(usize, usize)> = cg.valid_links().map(|l| (l.p, l.q)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    assert_eq!(cg.neighbors(0).count(), 2);
}

#[test]
fn parallel_contraction_matches_sequential() {
    let g = beluga::graph::random_eulerian(&beluga::graph::GeneratorOptions {
        vertices: 500,
        max_out_degree: 4,
        open_path: false,
        seed: Some(5),
    })
    .unwrap();
    let preds = Predecessors::build(&g);
    let succ = Successors::from_graph(&g, &preds, usize::MAX).unwrap();
    let partition = partition_cycles(&succ, PartitionStrategy::Scan, usize::MAX);
    let a = contract(&g, &preds, &partition, &CircuitOptions::sequential());
    let b = contract(
        &g,
        &preds,
        &partition,
        &CircuitOptions {
            min_parallel_size: 16,
            ..CircuitOptions::default()
        },
    );
    assert_eq!(a.links(), b.links());
}

fn first_seen() -> CircuitOptions {
    CircuitOptions {
        links: LinkStrategy::FirstSeen,
        ..CircuitOptions::sequential()
    }
}

#[test]
fn first_seen_links_each_cycle_to_the_first_one_at_the_vertex() {
    let g = Graph::new(vec![0, 4], vec![0, 0, 0, 0], LabelMap::ordinals(1)).unwrap();
    let preds = Predecessors::build(&g);
    let succ = Successors::from_graph(&g, &preds, usize::MAX).unwrap();
    let partition = partition_cycles(&succ, PartitionStrategy::Scan, usize::MAX);

    let all = contract(&g, &preds, &partition, &CircuitOptions::sequential());
    assert_eq!(all.valid_links().count(), 6);

    let star = contract(&g, &preds, &partition, &first_seen());
    let pairs: Vec<(usize, usize)> = star.valid_links().map(|l| (l.p, l.q)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3)]);
    assert_eq!(plan_swips(&star).unwrap().len(), 3);
}

#[test]
fn first_seen_still_spans_generated_cycle_graphs() {
    for seed in 0..10 {
        let g = beluga::graph::random_eulerian(&beluga::graph::GeneratorOptions {
            vertices: 300,
            max_out_degree: 6,
            open_path: false,
            seed: Some(seed),
        })
        .unwrap();
        let preds = Predecessors::build(&g);
        let succ = Successors::from_graph(&g, &preds, usize::MAX).unwrap();
        let partition = partition_cycles(&succ, PartitionStrategy::Scan, usize::MAX);
        let star = contract(&g, &preds, &partition, &first_seen());
        let all = contract(&g, &preds, &partition, &CircuitOptions::sequential());
        assert!(star.links().len() <= all.links().len());
        assert_eq!(plan_swips(&star).unwrap().len(), partition.count() - 1);
    }
}
