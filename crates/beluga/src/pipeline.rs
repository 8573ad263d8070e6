//! Pipeline entry point.
//!
//! Stages run in strict sequence, each consuming the buffers of the previous one:
//! predecessors -> successor permutation -> cycle partition -> (more than one cycle only)
//! cycle graph -> spanning tree / swips -> splice + verification.

use crate::contract::contract;
use crate::error::{Error, Result};
use crate::options::CircuitOptions;
use crate::partition::partition_cycles;
use crate::spanning_tree::{Swip, plan_swips};
use crate::splice::splice;
use crate::successor::Successors;
use beluga_graph::{Graph, Predecessors, alg};

/// A verified Eulerian circuit over the edges of `graph`.
#[derive(Debug, Clone)]
pub struct Circuit {
    graph: Graph,
    successors: Successors,
    swips: Vec<Swip>,
    input_cycles: usize,
}

impl Circuit {
    /// The input graph. Edge identity is unchanged; only the successor pairing differs from
    /// the canonical one.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Single-cycle successor permutation over edge indices.
    pub fn successors(&self) -> &Successors {
        &self.successors
    }

    pub fn swips(&self) -> &[Swip] {
        &self.swips
    }

    /// Cycle count of the canonical successor permutation before merging.
    pub fn input_cycles(&self) -> usize {
        self.input_cycles
    }

    /// Edge indices in traversal order, starting at edge 0.
    pub fn edge_sequence(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.successors.len());
        if self.successors.is_empty() {
            return out;
        }
        let mut e = 0usize;
        loop {
            out.push(e);
            e = self.successors.next(e);
            if e == 0 {
                break;
            }
        }
        out
    }

    /// Vertex ordinals visited, closed: the first and last entries are equal.
    pub fn vertex_walk(&self) -> Vec<usize> {
        let edges = self.edge_sequence();
        let Some(&first) = edges.first() else {
            return Vec::new();
        };
        let mut walk = Vec::with_capacity(edges.len() + 1);
        walk.push(self.graph.edge_source(first));
        walk.extend(edges.iter().map(|&e| self.graph.edge_target(e)));
        walk
    }

    pub fn vertex_labels(&self) -> Vec<&str> {
        self.vertex_walk()
            .into_iter()
            .map(|v| self.graph.label(v).unwrap_or_default())
            .collect()
    }

    /// The circuit as a graph container with one out-edge per edge index.
    pub fn to_successor_graph(&self) -> Result<Graph> {
        Ok(Graph::from_successors(self.successors.as_slice())?)
    }
}

/// Fails with [`Error::UnbalancedDegree`] for the lowest vertex whose in-degree differs from
/// its out-degree.
pub fn check_balanced(graph: &Graph) -> Result<()> {
    match graph.first_unbalanced() {
        None => Ok(()),
        Some(u) => Err(Error::UnbalancedDegree {
            vertex: u.vertex,
            label: graph.label(u.vertex).unwrap_or_default().to_string(),
            in_degree: u.in_degree,
            out_degree: u.out_degree,
        }),
    }
}

/// Computes a single Eulerian circuit of `graph`.
///
/// The graph must be degree-balanced ([`Error::UnbalancedDegree`] otherwise) and weakly
/// connected ([`Error::DisconnectedCycleGraph`] otherwise).
pub fn find_circuit(graph: Graph, options: &CircuitOptions) -> Result<Circuit> {
    let _span = tracing::debug_span!(
        "find_circuit",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    )
    .entered();

    check_balanced(&graph)?;

    let preds = Predecessors::build(&graph);
    let succ = Successors::from_graph(&graph, &preds, options.min_parallel_size)?;
    let partition = partition_cycles(&succ, options.partition, options.min_parallel_size);
    let input_cycles = partition.count();
    tracing::debug!(cycles = input_cycles, "decomposed successor permutation");

    if input_cycles <= 1 {
        return Ok(Circuit {
            graph,
            successors: succ,
            swips: Vec::new(),
            input_cycles,
        });
    }

    let cycle_graph = contract(&graph, &preds, &partition, options);
    drop(partition);
    drop(preds);

    let swips = plan_swips(&cycle_graph).map_err(|err| match err {
        Error::DisconnectedCycleGraph {
            reached,
            total,
            unreached,
            ..
        } => Error::DisconnectedCycleGraph {
            reached,
            total,
            unreached,
            graph_connected: Some(alg::is_weakly_connected(&graph)),
        },
        other => other,
    })?;
    debug_assert_eq!(swips.len(), input_cycles - 1);

    let successors = splice(succ, &swips, options)?;
    Ok(Circuit {
        graph,
        successors,
        swips,
        input_cycles,
    })
}
