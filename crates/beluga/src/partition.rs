//! Cycle decomposition of the successor permutation.
//!
//! Both strategies number cycles in ascending order of their smallest edge index, so they
//! agree on ids as well as on the equivalence classes.

use crate::options::PartitionStrategy;
use crate::parallel;
use crate::successor::Successors;

const UNASSIGNED: usize = usize::MAX;

/// Partition id for every edge. Edges sharing an id lie on the same cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    of_edge: Vec<usize>,
    count: usize,
}

impl Partition {
    /// Number of disjoint cycles.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn of(&self, e: usize) -> usize {
        self.of_edge[e]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.of_edge
    }

    pub fn is_single_circuit(&self) -> bool {
        self.count == 1
    }

    pub fn same_cycle(&self, a: usize, b: usize) -> bool {
        self.of_edge[a] == self.of_edge[b]
    }

    /// Edge count of each cycle, indexed by partition id.
    pub fn cycle_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.count];
        for &p in &self.of_edge {
            sizes[p] += 1;
        }
        sizes
    }
}

pub fn partition_cycles(
    succ: &Successors,
    strategy: PartitionStrategy,
    min_parallel_size: usize,
) -> Partition {
    let partition = match strategy {
        PartitionStrategy::Scan => scan(succ),
        PartitionStrategy::PointerJumping => pointer_jumping(succ, min_parallel_size),
    };
    debug_assert!(
        succ.is_empty() || partition.count > 0,
        "non-empty permutation without cycles"
    );
    tracing::trace!(
        edges = succ.len(),
        cycles = partition.count,
        ?strategy,
        "partitioned successor permutation"
    );
    partition
}

fn scan(succ: &Successors) -> Partition {
    let mut of_edge = vec![UNASSIGNED; succ.len()];
    let mut count = 0usize;
    for start in 0..succ.len() {
        if of_edge[start] != UNASSIGNED {
            continue;
        }
        let id = count;
        count += 1;
        let mut e = start;
        loop {
            of_edge[e] = id;
            e = succ.next(e);
            if e == start {
                break;
            }
        }
    }
    Partition { of_edge, count }
}

fn pointer_jumping(succ: &Successors, min_parallel_size: usize) -> Partition {
    let n = succ.len();
    let next = succ.as_slice();

    // `low[e]` is the minimum over `e, next(e), ..., next^span(e)`; `jump[e]` is `next^span(e)`.
    let mut jump: Vec<usize> = next.to_vec();
    let mut low: Vec<usize> = parallel::map_range(n, min_parallel_size, |e| e.min(next[e]));
    let mut span = 1usize;
    while span < n {
        let (low_ref, jump_ref) = (&low, &jump);
        let new_low =
            parallel::map_range(n, min_parallel_size, |e| low_ref[e].min(low_ref[jump_ref[e]]));
        let new_jump = parallel::map_range(n, min_parallel_size, |e| jump_ref[jump_ref[e]]);
        low = new_low;
        jump = new_jump;
        span *= 2;
    }

    let mut id_of_root = vec![UNASSIGNED; n];
    let mut count = 0usize;
    for e in 0..n {
        if low[e] == e {
            id_of_root[e] = count;
            count += 1;
        }
    }
    let of_edge = parallel::map_range(n, min_parallel_size, |e| id_of_root[low[e]]);
    Partition { of_edge, count }
}
