//! The edge successor permutation.
//!
//! At every vertex `v`, the k-th edge entering `v` (in ascending edge index order) continues
//! with the k-th edge leaving `v`. When in-degree equals out-degree everywhere this pairs each
//! edge with exactly one successor, so the map is a permutation of `[0, E)`.

use crate::parallel;
use beluga_graph::{Graph, MalformedGraph, Predecessors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successors {
    next: Vec<usize>,
}

impl Successors {
    /// Canonical successor of every edge.
    ///
    /// Fails with [`MalformedGraph::NotAPermutation`] when `g` is not degree-balanced.
    pub fn from_graph(
        g: &Graph,
        preds: &Predecessors,
        min_parallel_size: usize,
    ) -> beluga_graph::Result<Self> {
        let offsets = g.row_offsets();
        let cols = g.col_indices();
        let slots = preds.slots();
        let next = parallel::map_range(g.edge_count(), min_parallel_size, |e| {
            offsets[cols[e]] + slots[e]
        });
        Self::from_vec(next)
    }

    pub fn from_vec(next: Vec<usize>) -> beluga_graph::Result<Self> {
        is_permutation(&next)?;
        Ok(Self { next })
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    pub fn next(&self, e: usize) -> usize {
        self.next[e]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.next
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.next
    }

    /// Inverse permutation: the edge whose successor is `e`, for every `e`.
    pub fn predecessors(&self) -> Vec<usize> {
        let mut prev = vec![0usize; self.next.len()];
        for (e, &n) in self.next.iter().enumerate() {
            prev[n] = e;
        }
        prev
    }

    pub(crate) fn swap_targets(&mut self, e1: usize, e2: usize) {
        self.next.swap(e1, e2);
    }

    pub(crate) fn set(&mut self, e: usize, target: usize) {
        self.next[e] = target;
    }
}

fn is_permutation(next: &[usize]) -> Result<(), MalformedGraph> {
    let mut seen = vec![false; next.len()];
    for (index, &target) in next.iter().enumerate() {
        if target >= next.len() || std::mem::replace(&mut seen[target], true) {
            return Err(MalformedGraph::NotAPermutation { index, target });
        }
    }
    Ok(())
}
