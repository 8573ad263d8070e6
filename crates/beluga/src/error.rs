#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] beluga_graph::Error),

    #[error(
        "vertex {label:?} (ordinal {vertex}) has in-degree {in_degree} but out-degree {out_degree}"
    )]
    UnbalancedDegree {
        vertex: usize,
        label: String,
        in_degree: usize,
        out_degree: usize,
    },

    #[error(
        "cycle graph is disconnected: reached {reached} of {total} partitions, unreached include {unreached:?} (input weakly connected: {graph_connected:?})"
    )]
    DisconnectedCycleGraph {
        reached: usize,
        total: usize,
        /// Up to [`MAX_REPORTED_PARTITIONS`] partitions the traversal never reached.
        unreached: Vec<usize>,
        /// `Some(false)` means the input itself is disconnected; `Some(true)` points at the
        /// contractor. `None` when the check was not run.
        graph_connected: Option<bool>,
    },

    #[error("splice left {partitions} cycles instead of a single circuit")]
    SpliceIncomplete { partitions: usize },
}

pub const MAX_REPORTED_PARTITIONS: usize = 16;

impl Error {
    /// True for structural violations of the input arrays.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::Graph(beluga_graph::Error::MalformedGraph(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
