//! Applying swips to the successor permutation.
//!
//! Swips that share no edge commute, so they can run concurrently. Swips that share an edge
//! are applied in their original order.

use crate::error::{Error, Result};
use crate::options::CircuitOptions;
use crate::parallel;
use crate::partition::partition_cycles;
use crate::spanning_tree::Swip;
use crate::successor::Successors;
use rustc_hash::FxHashMap;

/// Groups swips into batches of pairwise-disjoint edge pairs.
///
/// A swip lands one batch after the latest batch holding a swip that touches either of its
/// edges, which keeps overlapping swips in input order.
pub fn schedule(swips: &[Swip]) -> Vec<Vec<Swip>> {
    let mut next_free: FxHashMap<usize, usize> = FxHashMap::default();
    let mut batches: Vec<Vec<Swip>> = Vec::new();
    for &swip in swips {
        let at = |e: usize| next_free.get(&e).copied().unwrap_or(0);
        let batch = at(swip.e1).max(at(swip.e2));
        if batch == batches.len() {
            batches.push(Vec::new());
        }
        batches[batch].push(swip);
        next_free.insert(swip.e1, batch + 1);
        next_free.insert(swip.e2, batch + 1);
    }
    batches
}

/// Exchanges `succ[e1]` and `succ[e2]` for every swip.
pub fn apply_swips(mut succ: Successors, swips: &[Swip], options: &CircuitOptions) -> Successors {
    if !options.batch_splice {
        for s in swips {
            succ.swap_targets(s.e1, s.e2);
        }
        return succ;
    }

    for batch in schedule(swips) {
        let updates = {
            let cur = &succ;
            let batch = &batch;
            parallel::map_range(batch.len(), options.min_parallel_size, |i| {
                let s = batch[i];
                [(s.e1, cur.next(s.e2)), (s.e2, cur.next(s.e1))]
            })
        };
        for (e, target) in updates.into_iter().flatten() {
            succ.set(e, target);
        }
    }
    succ
}

/// Applies the swips and checks that a single circuit remains.
pub fn splice(succ: Successors, swips: &[Swip], options: &CircuitOptions) -> Result<Successors> {
    let succ = apply_swips(succ, swips, options);
    let check = partition_cycles(&succ, options.partition, options.min_parallel_size);
    if !succ.is_empty() && !check.is_single_circuit() {
        return Err(Error::SpliceIncomplete {
            partitions: check.count(),
        });
    }
    tracing::debug!(swips = swips.len(), edges = succ.len(), "spliced circuit");
    Ok(succ)
}
