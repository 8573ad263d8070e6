//! Row-offset / column-index directed multigraph.

use crate::error::{MalformedGraph, Result};
use crate::labels::LabelMap;
use crate::reverse::Predecessors;
use rustc_hash::FxHashMap;

/// Directed multigraph in compact adjacency form.
///
/// Edge `e` leaves the vertex whose row contains position `e` and enters `col_indices[e]`.
/// The container is an immutable value: transformations produce a new `Graph`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    row_offsets: Vec<usize>,
    col_indices: Vec<usize>,
    labels: LabelMap,
}

impl Graph {
    pub fn new(row_offsets: Vec<usize>, col_indices: Vec<usize>, labels: LabelMap) -> Result<Self> {
        validate(&row_offsets, &col_indices, labels.len())?;
        Ok(Self {
            row_offsets,
            col_indices,
            labels,
        })
    }

    /// A graph with exactly one out-edge per vertex: vertex `i` points to `successors[i]`.
    pub fn from_successors(successors: &[usize]) -> Result<Self> {
        let row_offsets: Vec<usize> = (0..=successors.len()).collect();
        Self::new(
            row_offsets,
            successors.to_vec(),
            LabelMap::ordinals(successors.len()),
        )
    }

    pub fn from_adjacency(labels: LabelMap, adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let mut row_offsets: Vec<usize> = Vec::with_capacity(adjacency.len() + 1);
        let mut col_indices: Vec<usize> = Vec::new();
        row_offsets.push(0);
        for targets in adjacency {
            col_indices.extend(targets);
            row_offsets.push(col_indices.len());
        }
        Self::new(row_offsets, col_indices, labels)
    }

    pub fn empty() -> Self {
        Self {
            row_offsets: vec![0],
            col_indices: Vec::new(),
            labels: LabelMap::default(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.row_offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.col_indices.len()
    }

    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn label(&self, v: usize) -> Option<&str> {
        self.labels.label(v)
    }

    /// Successor ordinals of `v`, in edge order.
    pub fn successors(&self, v: usize) -> &[usize] {
        &self.col_indices[self.row_offsets[v]..self.row_offsets[v + 1]]
    }

    /// Edge index range leaving `v`.
    pub fn out_edges(&self, v: usize) -> std::ops::Range<usize> {
        self.row_offsets[v]..self.row_offsets[v + 1]
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.row_offsets[v + 1] - self.row_offsets[v]
    }

    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_deg = vec![0usize; self.vertex_count()];
        for &w in &self.col_indices {
            in_deg[w] += 1;
        }
        in_deg
    }

    pub fn edge_target(&self, e: usize) -> usize {
        self.col_indices[e]
    }

    /// Source vertex of edge `e`. Vertices with no out-edges never own a position, so the
    /// last row whose offset is `<= e` is the source.
    pub fn edge_source(&self, e: usize) -> usize {
        self.row_offsets.partition_point(|&start| start <= e) - 1
    }

    /// Source vertex for every edge index.
    pub fn edge_sources(&self) -> Vec<usize> {
        let mut sources = Vec::with_capacity(self.edge_count());
        for v in 0..self.vertex_count() {
            sources.extend(std::iter::repeat_n(v, self.out_degree(v)));
        }
        sources
    }

    /// `(source, target)` pairs in edge index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count()).flat_map(move |v| self.successors(v).iter().map(move |&w| (v, w)))
    }

    /// Multiset of `(source, target)` ordinal pairs with their multiplicity.
    pub fn edge_multiset(&self) -> FxHashMap<(usize, usize), usize> {
        let mut out: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for e in self.edges() {
            *out.entry(e).or_insert(0) += 1;
        }
        out
    }

    /// Reverses every edge. The out-degree of each vertex in the result equals its in-degree here.
    pub fn reverse(&self) -> Graph {
        let preds = Predecessors::build(self);
        let sources = self.edge_sources();
        let col_indices: Vec<usize> = preds.edges().iter().map(|&e| sources[e]).collect();
        Graph {
            row_offsets: preds.offsets().to_vec(),
            col_indices,
            labels: self.labels.clone(),
        }
    }

    /// First vertex (lowest ordinal) whose in-degree differs from its out-degree.
    pub fn first_unbalanced(&self) -> Option<Unbalanced> {
        let in_deg = self.in_degrees();
        (0..self.vertex_count()).find_map(|v| {
            let out_degree = self.out_degree(v);
            (in_deg[v] != out_degree).then(|| Unbalanced {
                vertex: v,
                in_degree: in_deg[v],
                out_degree,
            })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unbalanced {
    pub vertex: usize,
    pub in_degree: usize,
    pub out_degree: usize,
}

fn validate(row_offsets: &[usize], col_indices: &[usize], vertices: usize) -> Result<()> {
    if row_offsets.len() != vertices + 1 {
        return Err(MalformedGraph::OffsetsLength {
            offsets: row_offsets.len(),
            expected: vertices + 1,
        }
        .into());
    }
    if row_offsets[0] != 0 {
        return Err(MalformedGraph::OffsetsStart {
            first: row_offsets[0],
        }
        .into());
    }
    for (vertex, pair) in row_offsets.windows(2).enumerate() {
        if pair[0] > pair[1] {
            return Err(MalformedGraph::OffsetsNotMonotonic {
                vertex,
                start: pair[0],
                end: pair[1],
            }
            .into());
        }
    }
    let last = row_offsets[vertices];
    if last != col_indices.len() {
        return Err(MalformedGraph::EdgeCountMismatch {
            last,
            edges: col_indices.len(),
        }
        .into());
    }
    if let Some((edge, &target)) = col_indices.iter().enumerate().find(|&(_, &w)| w >= vertices) {
        return Err(MalformedGraph::ColumnOutOfRange {
            edge,
            target,
            vertices,
        }
        .into());
    }
    Ok(())
}

/// Incremental label-based construction, used by the text parser.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    index: FxHashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `label`. Labels the text format cannot carry are rejected by [`Self::build`].
    pub fn add_vertex(&mut self, label: impl Into<String>) -> usize {
        let label = label.into();
        if let Some(&ix) = self.index.get(&label) {
            return ix;
        }
        let ix = self.labels.len();
        self.labels.push(label.clone());
        self.index.insert(label, ix);
        self.adjacency.push(Vec::new());
        ix
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        let v = self.add_vertex(from);
        let w = self.add_vertex(to);
        self.adjacency[v].push(w);
        self
    }

    pub fn add_edge_ix(&mut self, v: usize, w: usize) -> &mut Self {
        self.adjacency[v].push(w);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn build(self) -> Result<Graph> {
        let labels = LabelMap::new(self.labels)?;
        Graph::from_adjacency(labels, self.adjacency)
    }
}
