//! Session-scoped ownership of one graph and its relation list.
//!
//! A `Session` is the single logical owner of the extraction state: queries
//! borrow it, and a rebuild replaces the whole extraction atomically rather
//! than merging into it. An embedding that serves several users keys one
//! `Session` per user; the session itself is strictly single-threaded and
//! synchronous.

use tracing::debug;

use crate::annotate::english::RuleAnnotator;
use crate::annotate::Annotator;
use crate::extract::{Extraction, Extractor, Relation};
use crate::graph::DependencyGraph;
use crate::impact::ImpactReport;

/// Holds the current extraction and the extractor that produces it.
pub struct Session<A: Annotator> {
    extractor: Extractor<A>,
    extraction: Extraction,
}

impl Session<RuleAnnotator> {
    /// Empty session backed by the bundled English annotator.
    pub fn with_default() -> Self {
        Self::new(Extractor::with_default())
    }
}

impl<A: Annotator> Session<A> {
    /// Empty session. No graph exists until the first [`rebuild`].
    ///
    /// [`rebuild`]: Session::rebuild
    pub fn new(extractor: Extractor<A>) -> Self {
        Self {
            extractor,
            extraction: Extraction::default(),
        }
    }

    /// Re-extract from `text`, replacing the previous graph and relation
    /// list wholesale.
    pub fn rebuild(&mut self, text: &str) {
        self.extraction = self.extractor.extract(text);
        debug!(
            "session rebuilt: {} components, {} relations",
            self.extraction.graph.node_count(),
            self.extraction.relations.len()
        );
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.extraction.graph
    }

    pub fn relations(&self) -> &[Relation] {
        &self.extraction.relations
    }

    pub fn relation_count(&self) -> usize {
        self.extraction.relations.len()
    }

    /// Component names in first-seen order.
    pub fn nodes(&self) -> Vec<String> {
        self.extraction.graph.nodes()
    }

    /// Impact query against the current graph.
    pub fn impact(&self, target: &str) -> ImpactReport {
        ImpactReport::compute(&self.extraction.graph, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::ImpactStatus;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::with_default();
        assert!(session.nodes().is_empty());
        assert_eq!(session.relation_count(), 0);
        assert!(!session.impact("Battery").found());
    }

    #[test]
    fn test_rebuild_populates_the_graph() {
        let mut session = Session::with_default();
        session.rebuild("The Battery powers the Engine.");
        assert_eq!(session.nodes(), vec!["Battery", "Engine"]);
        assert_eq!(session.relation_count(), 1);
        assert_eq!(session.relations()[0].label, "power");
    }

    #[test]
    fn test_rebuild_replaces_rather_than_merges() {
        let mut session = Session::with_default();
        session.rebuild("The Battery powers the Engine.");
        session.rebuild("The Pump cools the Reactor.");

        assert_eq!(session.nodes(), vec!["Pump", "Reactor"]);
        assert!(!session.graph().has_node("Battery"));
        assert_eq!(session.relation_count(), 1);
    }

    #[test]
    fn test_impact_through_the_session() {
        let mut session = Session::with_default();
        session.rebuild(
            "The Battery powers the Engine. The Engine drives the Wheels. \
             The Wheels support the Chassis.",
        );

        let report = session.impact("Battery");
        assert_eq!(report.chain, vec!["Battery", "Engine", "Wheels", "Chassis"]);
        assert_eq!(report.status, ImpactStatus::Critical);

        let report = session.impact("Chassis");
        assert_eq!(report.status, ImpactStatus::Safe);
    }

    #[test]
    fn test_rebuild_with_empty_text_clears_the_session() {
        let mut session = Session::with_default();
        session.rebuild("The Battery powers the Engine.");
        session.rebuild("");
        assert!(session.nodes().is_empty());
        assert_eq!(session.relation_count(), 0);
    }
}
