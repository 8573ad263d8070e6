//! Random degree-balanced multigraph generation.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::labels::LabelMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub vertices: usize,
    /// Upper bound on every vertex's out-degree (and therefore in-degree).
    pub max_out_degree: usize,
    /// Drop one edge `u -> w` (`u != w`) so that exactly `u` and `w` are unbalanced by one.
    pub open_path: bool,
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            vertices: 16,
            max_out_degree: 3,
            open_path: false,
            seed: None,
        }
    }
}

/// Generates a weakly connected multigraph with in-degree = out-degree at every vertex
/// (unless `open_path` is set).
///
/// A random Hamiltonian cycle provides connectivity; each further round chains a random
/// subset of vertices into vertex-disjoint cycles, adding one in- and one out-edge to each
/// participant. There are exactly `max_out_degree - 1` rounds.
pub fn random_eulerian(options: &GeneratorOptions) -> Result<Graph> {
    let n = options.vertices;
    if n > 0 && options.max_out_degree == 0 {
        return Err(Error::InvalidGeneratorOptions {
            message: "max_out_degree must be at least 1".to_string(),
        });
    }
    if options.open_path && n < 2 {
        return Err(Error::InvalidGeneratorOptions {
            message: "open_path requires at least 2 vertices".to_string(),
        });
    }
    if n == 0 {
        return Ok(Graph::empty());
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        adjacency[order[i]].push(order[(i + 1) % n]);
    }

    for _round in 1..options.max_out_degree {
        let mut open: Vec<usize> = (0..n).filter(|_| rng.gen_bool(0.5)).collect();
        open.shuffle(&mut rng);

        let mut rest = open.as_slice();
        while rest.len() >= 2 {
            let len = rng.gen_range(2..=rest.len());
            let (cycle, tail) = rest.split_at(len);
            for i in 0..len {
                adjacency[cycle[i]].push(cycle[(i + 1) % len]);
            }
            rest = tail;
        }
    }

    if options.open_path {
        // The Hamiltonian edge is always first in its source's list.
        let i = rng.gen_range(0..n);
        adjacency[order[i]].remove(0);
    }

    let g = Graph::from_adjacency(LabelMap::ordinals(n), adjacency)?;
    tracing::debug!(
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        open_path = options.open_path,
        "generated random eulerian graph"
    );
    Ok(g)
}
