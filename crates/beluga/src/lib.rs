#![forbid(unsafe_code)]

//! Eulerian circuits of large directed multigraphs by cycle decomposition and merge.
//!
//! The canonical edge successor permutation of a degree-balanced graph splits into disjoint
//! cycles. `beluga` contracts those cycles into a cycle graph, picks a spanning tree of it, and
//! turns every tree edge into one swip (an exchange of two successor targets at a shared
//! vertex). Applying the swips merges all cycles into a single circuit.
//!
//! Array-wide stages are written as pure index maps and run on rayon when the `parallel`
//! feature is enabled (default).

pub use beluga_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod contract;
pub mod error;
pub mod options;
pub mod parallel;
pub mod partition;
pub mod pipeline;
pub mod spanning_tree;
pub mod splice;
pub mod successor;

pub use contract::{CycleGraph, MergeLink, contract};
pub use error::{Error, Result};
pub use graph::{Graph, GraphBuilder, LabelMap, Predecessors};
pub use options::{CircuitOptions, LinkStrategy, PartitionStrategy};
pub use partition::{Partition, partition_cycles};
pub use pipeline::{Circuit, check_balanced, find_circuit};
pub use spanning_tree::{SpanningTree, Swip, TreeEdge, plan_swips, spanning_tree};
pub use splice::{apply_swips, schedule, splice};
pub use successor::Successors;
