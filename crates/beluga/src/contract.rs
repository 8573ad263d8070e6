//! Contraction of cycles into the cycle graph.
//!
//! Each partition becomes one node. Two partitions are linked when some vertex `v` has an
//! incoming edge from each of them: exchanging the successors of those two edges splices the
//! cycles together at `v`. Two incoming edges of the same partition produce an invalid link,
//! since exchanging them would split that cycle instead.
//!
//! With [`LinkStrategy::AllPairs`] a vertex entered by `d` distinct partitions emits
//! `d (d - 1) / 2` candidates, so a vertex carrying `k` self-loops costs O(k^2) before
//! deduplication. [`LinkStrategy::FirstSeen`] keeps that linear.

use crate::options::{CircuitOptions, LinkStrategy};
use crate::parallel;
use crate::partition::Partition;
use beluga_graph::{Graph, Predecessors};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// One candidate merge point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeLink {
    /// Smaller partition id.
    pub p: usize,
    /// Larger partition id (equal to `p` for invalid links).
    pub q: usize,
    /// Vertex both edges enter.
    pub vertex: usize,
    /// `(edge from p, edge from q)`, both ending at `vertex`.
    pub edges: (usize, usize),
    pub valid: bool,
}

impl MergeLink {
    fn new(vertex: usize, (pa, ea): (usize, usize), (pb, eb): (usize, usize)) -> Self {
        let ((p, e1), (q, e2)) = if (pa, ea) <= (pb, eb) {
            ((pa, ea), (pb, eb))
        } else {
            ((pb, eb), (pa, ea))
        };
        Self {
            p,
            q,
            vertex,
            edges: (e1, e2),
            valid: p != q,
        }
    }

    /// Tie-break order among candidates for the same partition pair.
    fn rank(&self) -> (usize, usize, usize) {
        let (a, b) = self.edges;
        (self.vertex, a.min(b), a.max(b))
    }

    /// The partition on the other end of this link.
    pub fn other(&self, partition: usize) -> usize {
        if partition == self.p { self.q } else { self.p }
    }
}

/// Contracted graph over partitions `[0, partitions)`.
#[derive(Debug, Clone)]
pub struct CycleGraph {
    partitions: usize,
    links: Vec<MergeLink>,
    offsets: Vec<usize>,
    adjacency: Vec<usize>,
}

impl CycleGraph {
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// All deduplicated links, sorted by `(p, q)`. Includes invalid self-links.
    pub fn links(&self) -> &[MergeLink] {
        &self.links
    }

    pub fn valid_links(&self) -> impl Iterator<Item = &MergeLink> {
        self.links.iter().filter(|l| l.valid)
    }

    /// Valid links incident to partition `p`, in `(p, q)` order.
    pub fn neighbors(&self, p: usize) -> impl Iterator<Item = &MergeLink> {
        self.adjacency[self.offsets[p]..self.offsets[p + 1]]
            .iter()
            .map(|&ix| &self.links[ix])
    }
}

pub fn contract(
    g: &Graph,
    preds: &Predecessors,
    partition: &Partition,
    options: &CircuitOptions,
) -> CycleGraph {
    let strategy = options.links;
    let per_vertex = parallel::map_range(g.vertex_count(), options.min_parallel_size, |v| {
        vertex_candidates(v, preds.in_edges(v), partition, strategy)
    });

    let mut best: FxHashMap<(usize, usize), MergeLink> = FxHashMap::default();
    for link in per_vertex.into_iter().flatten() {
        best.entry((link.p, link.q))
            .and_modify(|cur| {
                if link.rank() < cur.rank() {
                    *cur = link;
                }
            })
            .or_insert(link);
    }

    let mut links: Vec<MergeLink> = best.into_values().collect();
    links.sort_by_key(|l| (l.p, l.q));

    let partitions = partition.count();
    let mut offsets = vec![0usize; partitions + 1];
    for l in links.iter().filter(|l| l.valid) {
        offsets[l.p + 1] += 1;
        offsets[l.q + 1] += 1;
    }
    for p in 0..partitions {
        offsets[p + 1] += offsets[p];
    }
    let mut cursor: Vec<usize> = offsets[..partitions].to_vec();
    let mut adjacency = vec![0usize; offsets[partitions]];
    for (ix, l) in links.iter().enumerate().filter(|(_, l)| l.valid) {
        for end in [l.p, l.q] {
            adjacency[cursor[end]] = ix;
            cursor[end] += 1;
        }
    }

    tracing::debug!(
        partitions,
        links = links.len(),
        valid = offsets[partitions] / 2,
        ?strategy,
        "contracted cycle graph"
    );

    CycleGraph {
        partitions,
        links,
        offsets,
        adjacency,
    }
}

/// Candidate links at one vertex. `in_edges` is ascending, so the first edge seen from each
/// partition is that partition's lowest-index representative.
fn vertex_candidates(
    v: usize,
    in_edges: &[usize],
    partition: &Partition,
    strategy: LinkStrategy,
) -> Vec<MergeLink> {
    if in_edges.len() < 2 {
        return Vec::new();
    }
    let mut firsts: Vec<(usize, usize)> = Vec::new();
    let mut out: Vec<MergeLink> = Vec::new();
    for &e in in_edges {
        let p = partition.of(e);
        if let Some(&(_, first)) = firsts.iter().find(|&&(q, _)| q == p) {
            out.push(MergeLink::new(v, (p, first), (p, e)));
            continue;
        }
        let partners = match strategy {
            LinkStrategy::AllPairs => &firsts[..],
            LinkStrategy::FirstSeen => &firsts[..firsts.len().min(1)],
        };
        for &other in partners {
            out.push(MergeLink::new(v, other, (p, e)));
        }
        firsts.push((p, e));
    }
    out
}
