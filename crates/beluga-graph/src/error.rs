/// Structural violations detected while building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedGraph {
    #[error("row offsets have length {offsets}, expected {expected} (vertex count + 1)")]
    OffsetsLength { offsets: usize, expected: usize },

    #[error("row offsets must start at 0, found {first}")]
    OffsetsStart { first: usize },

    #[error("row offsets decrease at vertex {vertex}: {start} > {end}")]
    OffsetsNotMonotonic {
        vertex: usize,
        start: usize,
        end: usize,
    },

    #[error("last row offset is {last}, but there are {edges} column indices")]
    EdgeCountMismatch { last: usize, edges: usize },

    #[error("edge {edge} points to vertex {target}, but the graph has {vertices} vertices")]
    ColumnOutOfRange {
        edge: usize,
        target: usize,
        vertices: usize,
    },

    #[error("duplicate vertex label: {label}")]
    DuplicateLabel { label: String },

    #[error("vertex label {label:?} cannot be written in the adjacency text format")]
    UnrepresentableLabel { label: String },

    #[error("successor array is not a permutation: index {index} maps to {target}")]
    NotAPermutation { index: usize, target: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] MalformedGraph),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid generator options: {message}")]
    InvalidGeneratorOptions { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
