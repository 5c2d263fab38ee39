//! Directed dependency graph over component names.
//!
//! Nodes are component names exactly as they appeared in the text (case
//! sensitive, no normalization) and edge weights are relation labels. The
//! graph is an in-memory petgraph `DiGraph` with a name-to-index map for O(1)
//! lookup, rebuilt wholesale for every extraction.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Directed graph of component dependencies.
///
/// One label per ordered `(source, target)` pair: re-adding a relation for an
/// existing pair overwrites the label. Self-loops and cycles are permitted.
#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    pub(crate) graph: DiGraph<String, String>,
    pub(crate) node_map: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node, creating it on first sight.
    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), idx);
        idx
    }

    /// Add a labeled edge from `source` to `target`, creating either endpoint
    /// if it is not yet a node. An existing edge for the pair gets its label
    /// replaced.
    pub fn add_relation(&mut self, source: &str, target: &str, label: &str) {
        let s = self.intern(source);
        let t = self.intern(target);
        self.graph.update_edge(s, t, label.to_string());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Component names in first-seen order.
    pub fn nodes(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].clone())
            .collect()
    }

    /// All edges as `(source, target, label)` in insertion order. An
    /// overwritten edge keeps its original position.
    pub fn edges(&self) -> Vec<(String, String, String)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].clone(),
                    self.graph[edge.target()].clone(),
                    edge.weight().clone(),
                )
            })
            .collect()
    }

    /// Current label of the `source -> target` edge, if present.
    pub fn edge_label(&self, source: &str, target: &str) -> Option<&str> {
        let s = *self.node_map.get(source)?;
        let t = *self.node_map.get(target)?;
        let edge = self.graph.find_edge(s, t)?;
        self.graph.edge_weight(edge).map(String::as_str)
    }
}
