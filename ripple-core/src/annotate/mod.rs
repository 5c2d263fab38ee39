//! Linguistic annotation boundary.
//!
//! The extraction pipeline consumes sentence-level annotations (tokens with
//! part-of-speech, lemma, and dependency role) through the [`Annotator`]
//! trait. Any implementation is substitutable; the crate ships
//! [`english::RuleAnnotator`] as the bundled default for short declarative
//! technical prose.

use serde::{Deserialize, Serialize};

pub mod english;

/// Coarse part-of-speech vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Verb,
    Aux,
    Noun,
    ProperNoun,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Adjective,
    Adverb,
    Punct,
    Other,
}

impl PosTag {
    /// True for content words that can head a subject or object phrase.
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun)
    }
}

/// Dependency role vocabulary.
///
/// The role set is an explicit enumeration of the labels the extraction rules
/// care about. Classification into subject-like and object-like roles lives
/// here as data rather than as string matching scattered through the
/// extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepRole {
    /// Nominal subject ("The **Battery** powers...").
    Nsubj,
    /// Passive nominal subject.
    NsubjPass,
    /// Clausal subject.
    Csubj,
    /// Passive clausal subject.
    CsubjPass,
    /// Direct object ("...powers the **Engine**").
    Dobj,
    /// Indirect object.
    Iobj,
    /// Object of a preposition.
    Pobj,
    /// Generic object.
    Obj,
    /// Clause root (usually the main verb).
    Root,
    /// Determiner.
    Det,
    /// Preposition.
    Prep,
    /// Auxiliary verb.
    Aux,
    /// Compound modifier.
    Compound,
    /// Attribute complement.
    Attr,
    /// Any role the rules do not act on.
    Other,
}

impl DepRole {
    /// True for all subject roles, active or passive, nominal or clausal.
    pub fn is_subject_like(&self) -> bool {
        matches!(
            self,
            DepRole::Nsubj | DepRole::NsubjPass | DepRole::Csubj | DepRole::CsubjPass
        )
    }

    /// True for direct, indirect, prepositional, and generic objects.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            DepRole::Dobj | DepRole::Iobj | DepRole::Pobj | DepRole::Obj
        )
    }

    /// Conventional lowercase label for display and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            DepRole::Nsubj => "nsubj",
            DepRole::NsubjPass => "nsubjpass",
            DepRole::Csubj => "csubj",
            DepRole::CsubjPass => "csubjpass",
            DepRole::Dobj => "dobj",
            DepRole::Iobj => "iobj",
            DepRole::Pobj => "pobj",
            DepRole::Obj => "obj",
            DepRole::Root => "root",
            DepRole::Det => "det",
            DepRole::Prep => "prep",
            DepRole::Aux => "aux",
            DepRole::Compound => "compound",
            DepRole::Attr => "attr",
            DepRole::Other => "other",
        }
    }
}

/// A single annotated token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appeared in the input.
    pub text: String,
    /// Dictionary form ("powers" -> "power").
    pub lemma: String,
    pub pos: PosTag,
    pub role: DepRole,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        role: DepRole,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            role,
        }
    }
}

/// One annotated sentence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Approximate surface form, for log messages.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sentence segmentation plus per-token POS, lemma, and dependency role.
///
/// Annotation is infallible: implementations degrade to coarse or empty
/// annotations rather than erroring. Sentences are returned in document
/// order.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Vec<Sentence>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_like_roles() {
        assert!(DepRole::Nsubj.is_subject_like());
        assert!(DepRole::NsubjPass.is_subject_like());
        assert!(DepRole::Csubj.is_subject_like());
        assert!(DepRole::CsubjPass.is_subject_like());
        assert!(!DepRole::Dobj.is_subject_like());
        assert!(!DepRole::Root.is_subject_like());
    }

    #[test]
    fn test_object_like_roles() {
        assert!(DepRole::Dobj.is_object_like());
        assert!(DepRole::Iobj.is_object_like());
        assert!(DepRole::Pobj.is_object_like());
        assert!(DepRole::Obj.is_object_like());
        assert!(!DepRole::Nsubj.is_object_like());
        assert!(!DepRole::Det.is_object_like());
    }

    #[test]
    fn test_no_role_is_both_subject_and_object() {
        let all = [
            DepRole::Nsubj,
            DepRole::NsubjPass,
            DepRole::Csubj,
            DepRole::CsubjPass,
            DepRole::Dobj,
            DepRole::Iobj,
            DepRole::Pobj,
            DepRole::Obj,
            DepRole::Root,
            DepRole::Det,
            DepRole::Prep,
            DepRole::Aux,
            DepRole::Compound,
            DepRole::Attr,
            DepRole::Other,
        ];
        for role in all {
            assert!(
                !(role.is_subject_like() && role.is_object_like()),
                "{} classified as both subject and object",
                role.as_str()
            );
        }
    }

    #[test]
    fn test_nominal_pos_tags() {
        assert!(PosTag::Noun.is_nominal());
        assert!(PosTag::ProperNoun.is_nominal());
        assert!(PosTag::Pronoun.is_nominal());
        assert!(!PosTag::Verb.is_nominal());
        assert!(!PosTag::Determiner.is_nominal());
    }

    #[test]
    fn test_sentence_text() {
        let sentence = Sentence::new(vec![
            Token::new("The", "the", PosTag::Determiner, DepRole::Det),
            Token::new("Battery", "battery", PosTag::ProperNoun, DepRole::Nsubj),
        ]);
        assert_eq!(sentence.text(), "The Battery");
    }
}
