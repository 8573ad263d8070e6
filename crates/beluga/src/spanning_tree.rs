//! Spanning tree of the cycle graph and the swips it induces.

use crate::contract::{CycleGraph, MergeLink};
use crate::error::{Error, MAX_REPORTED_PARTITIONS, Result};
use serde::Serialize;
use std::collections::VecDeque;

/// Exchange of the successor targets of two edges entering the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Swip {
    pub e1: usize,
    pub e2: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    pub parent: usize,
    pub child: usize,
    pub link: MergeLink,
}

#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    pub root: usize,
    /// Tree edges in discovery order.
    pub edges: Vec<TreeEdge>,
}

impl SpanningTree {
    /// One swip per tree edge, in discovery order.
    pub fn swips(&self) -> Vec<Swip> {
        self.edges
            .iter()
            .map(|t| Swip {
                e1: t.link.edges.0,
                e2: t.link.edges.1,
            })
            .collect()
    }
}

/// Breadth-first spanning tree over valid links, rooted at partition 0.
///
/// Fails with [`Error::DisconnectedCycleGraph`] when some partition cannot be reached; the
/// `graph_connected` field is left as `None` for the caller to fill in.
pub fn spanning_tree(cg: &CycleGraph) -> Result<SpanningTree> {
    let total = cg.partitions();
    if total == 0 {
        return Ok(SpanningTree::default());
    }

    let root = 0usize;
    let mut in_tree = vec![false; total];
    let mut edges: Vec<TreeEdge> = Vec::with_capacity(total - 1);
    let mut q: VecDeque<usize> = VecDeque::new();
    in_tree[root] = true;
    q.push_back(root);

    while let Some(p) = q.pop_front() {
        for link in cg.neighbors(p) {
            debug_assert!(link.valid);
            let child = link.other(p);
            if in_tree[child] {
                continue;
            }
            in_tree[child] = true;
            edges.push(TreeEdge {
                parent: p,
                child,
                link: *link,
            });
            q.push_back(child);
        }
    }

    let reached = edges.len() + 1;
    if reached < total {
        let unreached: Vec<usize> = (0..total)
            .filter(|&p| !in_tree[p])
            .take(MAX_REPORTED_PARTITIONS)
            .collect();
        return Err(Error::DisconnectedCycleGraph {
            reached,
            total,
            unreached,
            graph_connected: None,
        });
    }

    tracing::debug!(partitions = total, tree_edges = edges.len(), "built spanning tree");
    Ok(SpanningTree { root, edges })
}

/// The `partitions - 1` swips that merge every cycle into one.
pub fn plan_swips(cg: &CycleGraph) -> Result<Vec<Swip>> {
    Ok(spanning_tree(cg)?.swips())
}
