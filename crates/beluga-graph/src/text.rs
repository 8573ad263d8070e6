//! Line-oriented adjacency text format.
//!
//! ```text
//! # comment
//! a -> b,c
//! b -> a
//! c -> a
//! d ->
//! ```
//!
//! Vertices receive ordinals in order of first mention. A label may head several lines; its
//! successors are appended in the order they appear.

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder};
use std::fmt::Write as _;

const ARROW: &str = "->";

pub fn parse(text: &str) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    for (ix, raw) in text.lines().enumerate() {
        let line_no = ix + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((lhs, rhs)) = line.split_once(ARROW) else {
            return Err(parse_error(line_no, format!("expected `{ARROW}` in `{line}`")));
        };
        let source = lhs.trim();
        if source.is_empty() {
            return Err(parse_error(line_no, "missing source label"));
        }
        let v = builder.add_vertex(source);

        let rhs = rhs.trim();
        if rhs.is_empty() {
            continue;
        }
        for target in rhs.split(',') {
            let target = target.trim();
            if target.is_empty() {
                return Err(parse_error(line_no, "empty label in successor list"));
            }
            let w = builder.add_vertex(target);
            builder.add_edge_ix(v, w);
        }
    }
    builder.build()
}

/// Serializes one line per vertex in ordinal order, successors in edge order.
pub fn to_text(g: &Graph) -> String {
    let mut out = String::new();
    for v in 0..g.vertex_count() {
        let label = g.label(v).unwrap_or_default();
        let _ = write!(out, "{label} {ARROW}");
        for (i, &w) in g.successors(v).iter().enumerate() {
            let sep = if i == 0 { " " } else { "," };
            let _ = write!(out, "{sep}{}", g.label(w).unwrap_or_default());
        }
        out.push('\n');
    }
    out
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}
