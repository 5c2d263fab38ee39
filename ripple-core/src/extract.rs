//! Relation extraction from annotated text.
//!
//! Each sentence is scanned once for a (subject, verb, object) triple. The
//! scan is deliberately last-match-wins with no short circuit: in a sentence
//! with several candidate subjects or objects, the final mention is the one
//! that names the relation. Sentences without both a subject and an object
//! contribute nothing; lossy extraction is the policy, not a failure.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::annotate::english::RuleAnnotator;
use crate::annotate::{Annotator, PosTag};
use crate::graph::DependencyGraph;

/// Relation label used when a sentence has no main verb.
pub const DEFAULT_RELATION_LABEL: &str = "impacts";

/// One extracted `source --[label]--> target` relation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Relation {
    pub source: String,
    pub label: String,
    pub target: String,
}

impl Relation {
    pub fn new(source: impl Into<String>, label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --[{}]--> {}", self.source, self.label, self.target)
    }
}

/// Result of one extraction pass: the dependency graph plus the relations in
/// the order they were found.
///
/// The relation list is append-only. When a later sentence re-labels an
/// existing edge, the graph keeps only the newest label but the list keeps
/// every extracted relation.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub graph: DependencyGraph,
    pub relations: Vec<Relation>,
}

impl Extraction {
    /// Human-readable relation descriptions in extraction order.
    pub fn descriptions(&self) -> Vec<String> {
        self.relations.iter().map(Relation::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

/// Sentence-level relation extractor over any [`Annotator`].
pub struct Extractor<A: Annotator> {
    annotator: A,
}

impl Extractor<RuleAnnotator> {
    /// Extractor backed by the bundled English rule annotator.
    pub fn with_default() -> Self {
        Self::new(RuleAnnotator::new())
    }
}

impl<A: Annotator> Extractor<A> {
    pub fn new(annotator: A) -> Self {
        Self { annotator }
    }

    /// Build a dependency graph and relation list from free text.
    ///
    /// Deterministic for a fixed annotator; text that yields no triples
    /// produces an empty extraction rather than an error.
    pub fn extract(&self, text: &str) -> Extraction {
        let mut graph = DependencyGraph::new();
        let mut relations = Vec::new();

        for sentence in self.annotator.annotate(text) {
            let mut subject: Option<&str> = None;
            let mut object: Option<&str> = None;
            let mut verb: Option<&str> = None;

            for token in &sentence.tokens {
                if token.role.is_subject_like() {
                    subject = Some(&token.text);
                }
                if token.role.is_object_like() {
                    object = Some(&token.text);
                }
                if token.pos == PosTag::Verb {
                    verb = Some(&token.lemma);
                }
            }

            match (subject, object) {
                (Some(source), Some(target)) => {
                    let label = verb.unwrap_or(DEFAULT_RELATION_LABEL);
                    graph.add_relation(source, target, label);
                    relations.push(Relation::new(source, label, target));
                }
                _ => {
                    debug!(
                        "skipping sentence without a subject-object pair: {}",
                        sentence.text()
                    );
                }
            }
        }

        Extraction { graph, relations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{DepRole, Sentence, Token};

    /// Returns canned sentences regardless of input, so extraction semantics
    /// can be pinned independently of the bundled tagger.
    struct ScriptedAnnotator {
        sentences: Vec<Sentence>,
    }

    impl Annotator for ScriptedAnnotator {
        fn annotate(&self, _text: &str) -> Vec<Sentence> {
            self.sentences.clone()
        }
    }

    fn noun(text: &str, role: DepRole) -> Token {
        Token::new(text, text.to_lowercase(), PosTag::Noun, role)
    }

    fn verb(text: &str, lemma: &str) -> Token {
        Token::new(text, lemma, PosTag::Verb, DepRole::Root)
    }

    fn extract_scripted(sentences: Vec<Sentence>) -> Extraction {
        Extractor::new(ScriptedAnnotator { sentences }).extract("")
    }

    #[test]
    fn test_simple_triple() {
        let extraction = extract_scripted(vec![Sentence::new(vec![
            noun("Battery", DepRole::Nsubj),
            verb("powers", "power"),
            noun("Engine", DepRole::Dobj),
        ])]);

        assert_eq!(
            extraction.relations,
            vec![Relation::new("Battery", "power", "Engine")]
        );
        assert_eq!(extraction.graph.edge_label("Battery", "Engine"), Some("power"));
    }

    #[test]
    fn test_last_subject_and_object_win() {
        let extraction = extract_scripted(vec![Sentence::new(vec![
            noun("Sensor", DepRole::Nsubj),
            noun("Controller", DepRole::Nsubj),
            verb("feeds", "feed"),
            noun("Logger", DepRole::Dobj),
            noun("Display", DepRole::Pobj),
        ])]);

        assert_eq!(
            extraction.relations,
            vec![Relation::new("Controller", "feed", "Display")]
        );
    }

    #[test]
    fn test_last_verb_wins() {
        let extraction = extract_scripted(vec![Sentence::new(vec![
            noun("Engine", DepRole::Nsubj),
            verb("drives", "drive"),
            verb("stops", "stop"),
            noun("Wheels", DepRole::Dobj),
        ])]);

        assert_eq!(extraction.relations[0].label, "stop");
    }

    #[test]
    fn test_default_label_without_a_verb() {
        let extraction = extract_scripted(vec![Sentence::new(vec![
            noun("Config", DepRole::Nsubj),
            noun("Parser", DepRole::Dobj),
        ])]);

        assert_eq!(
            extraction.relations,
            vec![Relation::new("Config", "impacts", "Parser")]
        );
    }

    #[test]
    fn test_passive_subject_counts() {
        let extraction = extract_scripted(vec![Sentence::new(vec![
            noun("Engine", DepRole::NsubjPass),
            verb("driven", "drive"),
            noun("Battery", DepRole::Pobj),
        ])]);

        assert_eq!(
            extraction.relations,
            vec![Relation::new("Engine", "drive", "Battery")]
        );
    }

    #[test]
    fn test_sentence_without_object_is_skipped() {
        let extraction = extract_scripted(vec![Sentence::new(vec![
            noun("Engine", DepRole::Nsubj),
            verb("runs", "run"),
        ])]);

        assert!(extraction.is_empty());
        assert!(extraction.graph.is_empty());
    }

    #[test]
    fn test_sentence_without_subject_is_skipped() {
        let extraction = extract_scripted(vec![Sentence::new(vec![
            verb("restart", "restart"),
            noun("Daemon", DepRole::Dobj),
        ])]);

        assert!(extraction.is_empty());
    }

    #[test]
    fn test_skipped_sentences_do_not_break_later_ones() {
        let extraction = extract_scripted(vec![
            Sentence::new(vec![noun("Engine", DepRole::Nsubj), verb("runs", "run")]),
            Sentence::new(vec![
                noun("Battery", DepRole::Nsubj),
                verb("powers", "power"),
                noun("Engine", DepRole::Dobj),
            ]),
        ]);

        assert_eq!(extraction.relations.len(), 1);
        assert_eq!(extraction.relations[0].source, "Battery");
    }

    #[test]
    fn test_relabeled_edge_keeps_both_relations_in_the_list() {
        let extraction = extract_scripted(vec![
            Sentence::new(vec![
                noun("Engine", DepRole::Nsubj),
                verb("drives", "drive"),
                noun("Wheels", DepRole::Dobj),
            ]),
            Sentence::new(vec![
                noun("Engine", DepRole::Nsubj),
                verb("stops", "stop"),
                noun("Wheels", DepRole::Dobj),
            ]),
        ]);

        // The list keeps history; the graph keeps only the newest label.
        assert_eq!(extraction.relations.len(), 2);
        assert_eq!(extraction.graph.edge_count(), 1);
        assert_eq!(extraction.graph.edge_label("Engine", "Wheels"), Some("stop"));
    }

    #[test]
    fn test_relation_display_format() {
        let relation = Relation::new("Battery", "power", "Engine");
        assert_eq!(relation.to_string(), "Battery --[power]--> Engine");
    }

    #[test]
    fn test_descriptions_in_extraction_order() {
        let extraction = extract_scripted(vec![
            Sentence::new(vec![
                noun("A", DepRole::Nsubj),
                verb("calls", "call"),
                noun("B", DepRole::Dobj),
            ]),
            Sentence::new(vec![
                noun("B", DepRole::Nsubj),
                verb("calls", "call"),
                noun("C", DepRole::Dobj),
            ]),
        ]);

        assert_eq!(
            extraction.descriptions(),
            vec!["A --[call]--> B", "B --[call]--> C"]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "The Battery powers the Engine. The Engine drives the Wheels.";
        let extractor = Extractor::with_default();
        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first.relations, second.relations);
        assert_eq!(first.graph.nodes(), second.graph.nodes());
        assert_eq!(first.graph.edges(), second.graph.edges());
    }

    #[test]
    fn test_empty_text_yields_empty_extraction() {
        let extraction = Extractor::with_default().extract("");
        assert!(extraction.is_empty());
        assert_eq!(extraction.graph.node_count(), 0);
    }

    #[test]
    fn test_car_document_end_to_end() {
        let text = "The Battery powers the Engine. The Engine drives the Wheels. \
                    The Wheels support the Chassis. The Chassis holds the PassengerSeat. \
                    The CoolingSystem cools the Engine. The Chipset controls the CoolingSystem.";
        let extraction = Extractor::with_default().extract(text);

        assert_eq!(extraction.relations.len(), 6);
        let graph = &extraction.graph;
        assert_eq!(graph.edge_label("Battery", "Engine"), Some("power"));
        assert_eq!(graph.edge_label("Engine", "Wheels"), Some("drive"));
        assert_eq!(graph.edge_label("Wheels", "Chassis"), Some("support"));
        assert_eq!(graph.edge_label("Chassis", "PassengerSeat"), Some("hold"));
        assert_eq!(graph.edge_label("CoolingSystem", "Engine"), Some("cool"));
        assert_eq!(graph.edge_label("Chipset", "CoolingSystem"), Some("control"));

        // Forward reachability from the Battery runs the whole drive train.
        assert_eq!(
            graph.impact_of("Battery"),
            vec!["Battery", "Engine", "Wheels", "Chassis", "PassengerSeat"]
        );
        // The cooling branch reaches the drive train through the Engine.
        assert_eq!(
            graph.impact_of("Chipset"),
            vec!["Chipset", "CoolingSystem", "Engine", "Wheels", "Chassis", "PassengerSeat"]
        );
        // The PassengerSeat has no outgoing edges.
        assert_eq!(graph.impact_of("PassengerSeat"), vec!["PassengerSeat"]);
    }
}
