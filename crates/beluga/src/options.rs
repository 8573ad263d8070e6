//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// How the successor permutation is decomposed into cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartitionStrategy {
    /// Follow each unvisited cycle to completion. O(E), sequential.
    #[default]
    Scan,
    /// Propagate the smallest edge index around each cycle by pointer doubling.
    /// O(E log E) work in `ceil(log2 E)` data-parallel rounds.
    PointerJumping,
}

/// Which cross-partition pairs meeting at a vertex become cycle graph links.
///
/// A vertex entered by `d` distinct partitions yields `d (d - 1) / 2` candidates under
/// `AllPairs` but only `d - 1` under `FirstSeen`. Both connect the same partitions, so the
/// merge succeeds under either; only the chosen swips differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkStrategy {
    /// Link every pair of partitions that share a vertex.
    #[default]
    AllPairs,
    /// Link each partition to the first partition seen at the vertex.
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CircuitOptions {
    pub partition: PartitionStrategy,
    pub links: LinkStrategy,
    /// Array-wide stages with fewer items than this run on the calling thread.
    pub min_parallel_size: usize,
    /// Apply swips in batches of pairwise-disjoint edge pairs instead of one at a time.
    pub batch_splice: bool,
}

impl Default for CircuitOptions {
    fn default() -> Self {
        Self {
            partition: PartitionStrategy::Scan,
            links: LinkStrategy::AllPairs,
            min_parallel_size: 4096,
            batch_splice: true,
        }
    }
}

impl CircuitOptions {
    /// Everything on the calling thread, swips applied in order.
    pub fn sequential() -> Self {
        Self {
            min_parallel_size: usize::MAX,
            batch_splice: false,
            ..Default::default()
        }
    }
}
