//! Impact analysis: forward reachability from a changed component.
//!
//! "If I change X, what might break?" Everything reachable from X along
//! forward edges is a potential casualty. The traversal is a depth-first
//! preorder, so the chain reads as a propagation path: the changed component
//! first, then each dependency chain before the next sibling branch.

use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use std::collections::HashSet;

use crate::graph::DependencyGraph;

impl DependencyGraph {
    /// All components reachable from `source` along forward edges, in
    /// depth-first preorder with `source` first. Sibling edges are explored
    /// in insertion order, so the result is stable for a fixed graph. Each
    /// node appears at most once even through cycles.
    ///
    /// An unknown `source` yields an empty list, never an error.
    pub fn impact_of(&self, source: &str) -> Vec<String> {
        let start = match self.node_map.get(source) {
            Some(&idx) => idx,
            None => return vec![],
        };

        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(self.graph[current].clone());

            // Outgoing edges iterate newest-first; pushing them in that order
            // makes the stack pop oldest-first, i.e. insertion order.
            for edge in self.graph.edges_directed(current, Direction::Outgoing) {
                if !visited.contains(&edge.target()) {
                    stack.push(edge.target());
                }
            }
        }

        order
    }
}

/// Severity of an impact query result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStatus {
    Safe,
    Critical,
}

impl ImpactStatus {
    /// Critical when anything beyond the component itself is reachable.
    pub fn from_chain_len(len: usize) -> Self {
        if len > 1 {
            ImpactStatus::Critical
        } else {
            ImpactStatus::Safe
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ImpactStatus::Safe => "No downstream dependents. Safe to modify.",
            ImpactStatus::Critical => {
                "Downstream components depend on this. Review the chain before changing it."
            }
        }
    }

    pub fn color(&self) -> colored::Color {
        match self {
            ImpactStatus::Safe => colored::Color::Green,
            ImpactStatus::Critical => colored::Color::Red,
        }
    }
}

/// Full result of an impact query against one component.
#[derive(Clone, Debug, Serialize)]
pub struct ImpactReport {
    /// The component the query was about.
    pub target: String,
    /// Propagation chain in traversal order, target first. Empty when the
    /// target is not a node in the graph.
    pub chain: Vec<String>,
    /// Number of components affected beyond the target itself.
    pub impacted_count: usize,
    pub status: ImpactStatus,
}

impl ImpactReport {
    pub fn compute(graph: &DependencyGraph, target: &str) -> Self {
        let chain = graph.impact_of(target);
        let impacted_count = chain.len().saturating_sub(1);
        let status = ImpactStatus::from_chain_len(chain.len());
        Self {
            target: target.to_string(),
            chain,
            impacted_count,
            status,
        }
    }

    /// False when the target was not a node in the graph.
    pub fn found(&self) -> bool {
        !self.chain.is_empty()
    }

    /// The affected components, excluding the target itself.
    pub fn impacted(&self) -> &[String] {
        if self.chain.is_empty() {
            &[]
        } else {
            &self.chain[1..]
        }
    }
}
