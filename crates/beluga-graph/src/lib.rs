#![forbid(unsafe_code)]

//! Compact directed multigraph container used by `beluga`.
//!
//! Graphs are stored in row-offset / column-index form with an immutable label table. This
//! crate also carries the collaborators around the core pipeline: the reverse adjacency
//! builder, the line-oriented text format, and a random Eulerian graph generator.

pub mod alg;
pub mod error;
pub mod generate;
pub mod graph;
pub mod labels;
pub mod reverse;
pub mod text;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, MalformedGraph, Result};
pub use generate::{GeneratorOptions, random_eulerian};
pub use graph::{Graph, GraphBuilder, Unbalanced};
pub use labels::LabelMap;
pub use reverse::Predecessors;
