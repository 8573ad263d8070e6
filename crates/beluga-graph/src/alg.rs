//! Connectivity helpers.

use crate::graph::Graph;
use crate::reverse::Predecessors;
use std::collections::VecDeque;

/// Weakly connected components, each listed in BFS discovery order. Isolated vertices form
/// singleton components.
pub fn components(g: &Graph) -> Vec<Vec<usize>> {
    let preds = Predecessors::build(g);
    let sources = g.edge_sources();
    let mut seen = vec![false; g.vertex_count()];
    let mut out: Vec<Vec<usize>> = Vec::new();

    for start in 0..g.vertex_count() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut comp: Vec<usize> = Vec::new();
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            comp.push(v);
            for &w in g.successors(v) {
                if !seen[w] {
                    seen[w] = true;
                    q.push_back(w);
                }
            }
            for &e in preds.in_edges(v) {
                let u = sources[e];
                if !seen[u] {
                    seen[u] = true;
                    q.push_back(u);
                }
            }
        }
        out.push(comp);
    }

    out
}

/// True when all vertices that carry at least one edge lie in a single weakly connected
/// component. Isolated vertices are ignored; a graph without edges is connected.
pub fn is_weakly_connected(g: &Graph) -> bool {
    let in_deg = g.in_degrees();
    let mut with_edges = components(g)
        .into_iter()
        .filter(|comp| comp.iter().any(|&v| g.out_degree(v) + in_deg[v] > 0));
    with_edges.next();
    with_edges.next().is_none()
}
