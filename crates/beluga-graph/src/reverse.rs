//! Reverse adjacency over edge indices.
//!
//! Built by counting in-degrees, prefix-summing them into offsets, then scattering edge
//! indices in ascending order so every in-edge list is sorted.

use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    offsets: Vec<usize>,
    edges: Vec<usize>,
    slots: Vec<usize>,
}

impl Predecessors {
    pub fn build(g: &Graph) -> Self {
        let vertices = g.vertex_count();
        let cols = g.col_indices();

        let mut offsets = vec![0usize; vertices + 1];
        for &w in cols {
            offsets[w + 1] += 1;
        }
        for v in 0..vertices {
            offsets[v + 1] += offsets[v];
        }

        let mut cursor: Vec<usize> = offsets[..vertices].to_vec();
        let mut edges = vec![0usize; cols.len()];
        let mut slots = vec![0usize; cols.len()];
        for (e, &w) in cols.iter().enumerate() {
            let pos = cursor[w];
            edges[pos] = e;
            slots[e] = pos - offsets[w];
            cursor[w] += 1;
        }

        Self {
            offsets,
            edges,
            slots,
        }
    }

    /// Prefix sums of in-degrees; length `V + 1`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Edge indices grouped by target vertex.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Edge indices entering `v`, ascending.
    pub fn in_edges(&self, v: usize) -> &[usize] {
        &self.edges[self.offsets[v]..self.offsets[v + 1]]
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Position of edge `e` within the in-edge list of its target.
    pub fn slot(&self, e: usize) -> usize {
        self.slots[e]
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }
}
