//! Bidirectional vertex label table.

use crate::error::{MalformedGraph, Result};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Immutable mapping between external vertex labels and dense ordinals `[0, V)`.
///
/// Built once; cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    inner: Arc<LabelMapInner>,
}

#[derive(Debug, Default)]
struct LabelMapInner {
    labels: Vec<String>,
    ordinals: FxHashMap<String, usize>,
}

impl LabelMap {
    /// Builds the table from labels in ordinal order.
    ///
    /// Labels must be unique and must survive a trip through [`crate::text`]: non-empty, no
    /// surrounding whitespace, no line breaks, no `,` or `->`, and no leading `#`.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        let mut ordinals: FxHashMap<String, usize> = FxHashMap::default();
        ordinals.reserve(labels.len());
        for (ix, label) in labels.iter().enumerate() {
            if !is_representable(label) {
                return Err(MalformedGraph::UnrepresentableLabel {
                    label: label.clone(),
                }
                .into());
            }
            if ordinals.insert(label.clone(), ix).is_some() {
                return Err(MalformedGraph::DuplicateLabel {
                    label: label.clone(),
                }
                .into());
            }
        }
        Ok(Self {
            inner: Arc::new(LabelMapInner { labels, ordinals }),
        })
    }

    /// Labels `"0"`, `"1"`, ... `"n-1"`.
    pub fn ordinals(n: usize) -> Self {
        let labels: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let ordinals = labels
            .iter()
            .enumerate()
            .map(|(ix, label)| (label.clone(), ix))
            .collect();
        Self {
            inner: Arc::new(LabelMapInner { labels, ordinals }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.labels.is_empty()
    }

    pub fn ordinal(&self, label: &str) -> Option<usize> {
        self.inner.ordinals.get(label).copied()
    }

    pub fn label(&self, ordinal: usize) -> Option<&str> {
        self.inner.labels.get(ordinal).map(String::as_str)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.inner.labels.iter().map(String::as_str)
    }
}

impl PartialEq for LabelMap {
    fn eq(&self, other: &Self) -> bool {
        self.inner.labels == other.inner.labels
    }
}

impl Eq for LabelMap {}

fn is_representable(label: &str) -> bool {
    !label.is_empty()
        && label.trim() == label
        && !label.starts_with('#')
        && !label.contains(['\n', '\r', ','])
        && !label.contains("->")
}
