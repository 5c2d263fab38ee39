//! Ripple core - relation extraction and impact analysis over documentation.
//!
//! This crate turns free-text technical documentation into a directed
//! dependency graph of components and answers "what breaks if I change X"
//! by forward reachability from X.
//!
//! The pipeline has two stages:
//!
//! - **Extraction**: each sentence is annotated (via the [`Annotator`]
//!   boundary) and scanned for a (subject, verb, object) triple, which
//!   becomes a labeled edge `subject -> object`.
//! - **Impact**: a depth-first preorder walk from a component along forward
//!   edges yields the propagation chain.
//!
//! # Usage
//!
//! ```
//! use ripple_core::Extractor;
//!
//! let extraction = Extractor::with_default()
//!     .extract("The Battery powers the Engine. The Engine drives the Wheels.");
//! assert_eq!(extraction.relations.len(), 2);
//!
//! let chain = extraction.graph.impact_of("Battery");
//! assert_eq!(chain, vec!["Battery", "Engine", "Wheels"]);
//! ```

pub mod annotate;
pub mod error;
pub mod export;
pub mod extract;
pub mod graph;
pub mod impact;
pub mod session;

pub use annotate::english::RuleAnnotator;
pub use annotate::{Annotator, DepRole, PosTag, Sentence, Token};
pub use error::{Result, RippleError};
pub use export::{render, ExportFormat, NodeClass};
pub use extract::{Extraction, Extractor, Relation, DEFAULT_RELATION_LABEL};
pub use graph::DependencyGraph;
pub use impact::{ImpactReport, ImpactStatus};
pub use session::Session;
