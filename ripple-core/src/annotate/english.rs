//! Rule-based English annotator.
//!
//! A heuristic tagger for the register this tool is fed: short declarative
//! sentences from technical documentation ("The Battery powers the Engine.").
//! Component names are expected to be capitalized (TitleCase or CamelCase);
//! lowercase nouns are still recognized when they follow a determiner or a
//! preposition.
//!
//! The tagger is lexicon-driven: closed word classes are table lookups, verbs
//! come from a technical-verb lexicon (extendable at construction time) plus
//! inflectional morphology, and everything else defaults to a noun reading.
//! It makes no attempt at full dependency parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::{Annotator, DepRole, PosTag, Sentence, Token};

/// Sentence terminators. Runs of `.`, `!`, `?` end a sentence.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Word tokens (letters with interior apostrophes/hyphens/digits), bare
/// numbers, and the internal punctuation we keep as tokens.
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9_'\-]*|[0-9]+|[,;:]").unwrap());

static DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "its", "their", "his", "her", "our", "my",
    "your", "each", "every", "some", "any", "no", "all", "both",
];

static PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "over", "under",
    "through", "via", "across", "within", "without", "between", "during", "against", "after",
    "before", "behind", "along", "toward", "towards", "upon",
];

static PRONOUNS: &[&str] = &[
    "it", "they", "he", "she", "we", "you", "i", "them", "him", "us", "me", "itself", "themselves",
    "something", "everything", "anything", "nothing",
];

static CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "when",
    "whenever", "if", "unless", "until", "once", "since", "whereas",
];

static AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do", "does",
    "did", "will", "would", "can", "could", "may", "might", "must", "shall", "should",
];

/// Base-form lemmas of verbs common in component documentation. Extendable
/// per instance via [`RuleAnnotator::with_verbs`].
static BASE_VERBS: &[&str] = &[
    "power", "drive", "support", "control", "cool", "heat", "hold", "stop", "start", "run",
    "connect", "link", "send", "receive", "read", "write", "use", "require", "depend", "provide",
    "feed", "charge", "drain", "monitor", "trigger", "update", "manage", "load", "store", "cache",
    "process", "handle", "contain", "include", "call", "invoke", "notify", "signal", "affect",
    "impact", "break", "cause", "enable", "disable", "route", "transmit", "supply", "regulate",
    "report", "measure", "convert", "transform", "validate", "emit", "consume", "produce",
    "mount", "spin", "turn", "move", "push", "pull", "lift", "carry", "protect", "serve",
];

/// Irregular inflections mapped to their base form.
static IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("held", "hold"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("ran", "run"),
    ("fed", "feed"),
    ("sent", "send"),
    ("built", "build"),
    ("broke", "break"),
    ("broken", "break"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("kept", "keep"),
    ("found", "find"),
    ("wrote", "write"),
    ("written", "write"),
    ("led", "lead"),
    ("lost", "lose"),
    ("got", "get"),
    ("went", "go"),
    ("came", "come"),
    ("brought", "bring"),
    ("caught", "catch"),
    ("spun", "spin"),
];

/// Derivational suffixes that mark a word as an adjective when nothing more
/// specific applies.
static ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "less", "able", "ible", "ive", "ant", "ent", "ical",
];

/// Rule-based annotator with an extendable verb lexicon.
pub struct RuleAnnotator {
    extra_verbs: HashSet<String>,
}

impl RuleAnnotator {
    pub fn new() -> Self {
        Self {
            extra_verbs: HashSet::new(),
        }
    }

    /// Extend the verb lexicon with additional base-form lemmas, e.g. domain
    /// vocabulary from configuration.
    pub fn with_verbs<I>(verbs: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            extra_verbs: verbs.into_iter().map(|v| v.to_lowercase()).collect(),
        }
    }

    fn known_base(&self, lemma: &str) -> bool {
        BASE_VERBS.contains(&lemma) || self.extra_verbs.contains(lemma)
    }

    fn irregular_base(lower: &str) -> Option<&'static str> {
        IRREGULAR_VERBS
            .iter()
            .find(|(inflected, _)| *inflected == lower)
            .map(|(_, base)| *base)
    }

    /// Reduce an inflected verb to its base form. Irregular table first, then
    /// suffix stripping with a lexicon check to restore elided final `e`.
    fn verb_lemma(&self, lower: &str) -> String {
        if let Some(base) = Self::irregular_base(lower) {
            return base.to_string();
        }

        let len = lower.len();
        if len > 4 && lower.ends_with("ies") {
            return format!("{}y", &lower[..len - 3]);
        }
        if len > 3 && lower.ends_with("es") {
            let strip_s = &lower[..len - 1];
            if self.known_base(strip_s) {
                return strip_s.to_string();
            }
            let stem = &lower[..len - 2];
            if stem.ends_with('s')
                || stem.ends_with('x')
                || stem.ends_with('z')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
            {
                return stem.to_string();
            }
            return strip_s.to_string();
        }
        if len > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
        {
            return lower[..len - 1].to_string();
        }
        if len > 4 && lower.ends_with("ied") {
            return format!("{}y", &lower[..len - 3]);
        }
        if len > 3 && lower.ends_with("ed") && !lower.ends_with("eed") {
            let stem = &lower[..len - 2];
            if has_doubled_final_consonant(stem) {
                return stem[..stem.len() - 1].to_string();
            }
            let restored = format!("{}e", stem);
            if self.known_base(&restored) {
                return restored;
            }
            return stem.to_string();
        }
        if len > 5 && lower.ends_with("ing") {
            let stem = &lower[..len - 3];
            if has_doubled_final_consonant(stem) {
                return stem[..stem.len() - 1].to_string();
            }
            let restored = format!("{}e", stem);
            if self.known_base(&restored) {
                return restored;
            }
            return stem.to_string();
        }
        lower.to_string()
    }

    fn is_known_verb(&self, lower: &str) -> bool {
        Self::irregular_base(lower).is_some() || self.known_base(&self.verb_lemma(lower))
    }

    fn tag_word(&self, word: &str, lower: &str, position: usize, prev: Option<PosTag>) -> PosTag {
        if DETERMINERS.contains(&lower) {
            return PosTag::Determiner;
        }
        if PREPOSITIONS.contains(&lower) {
            return PosTag::Preposition;
        }
        if AUXILIARIES.contains(&lower) {
            return PosTag::Aux;
        }
        if PRONOUNS.contains(&lower) {
            return PosTag::Pronoun;
        }
        if CONJUNCTIONS.contains(&lower) {
            return PosTag::Conjunction;
        }
        // A determiner announces a nominal head.
        if matches!(prev, Some(PosTag::Determiner)) {
            return if starts_uppercase(word) {
                PosTag::ProperNoun
            } else {
                PosTag::Noun
            };
        }
        if has_interior_uppercase(word) {
            return PosTag::ProperNoun;
        }
        if starts_uppercase(word) && position > 0 {
            return PosTag::ProperNoun;
        }
        if self.is_known_verb(lower) {
            return PosTag::Verb;
        }
        if lower.len() > 4 && lower.ends_with("ly") && !lower.ends_with("ply") && !lower.ends_with("bly") {
            return PosTag::Adverb;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::Adjective;
        }
        if has_verbal_morphology(lower) {
            return PosTag::Verb;
        }
        PosTag::Noun
    }

    fn annotate_sentence(&self, segment: &str) -> Sentence {
        // First pass: POS tags, which only need the previous tag.
        let mut tagged: Vec<(String, String, PosTag)> = Vec::new();
        let mut prev: Option<PosTag> = None;
        for (position, m) in TOKEN.find_iter(segment).enumerate() {
            let word = m.as_str();
            let lower = word.to_lowercase();
            let tag = if word.chars().next().is_some_and(|c| c.is_alphabetic()) {
                self.tag_word(word, &lower, position, prev)
            } else if word.chars().all(|c| c.is_ascii_digit()) {
                PosTag::Noun
            } else {
                PosTag::Punct
            };
            let lemma = match tag {
                PosTag::Verb => self.verb_lemma(&lower),
                PosTag::ProperNoun => word.to_string(),
                _ => lower,
            };
            tagged.push((word.to_string(), lemma, tag));
            prev = Some(tag);
        }

        // Second pass: dependency roles for a declarative clause. Nominals
        // before the main verb are subjects, after it objects, and a pending
        // preposition claims the next nominal.
        let mut tokens = Vec::with_capacity(tagged.len());
        let mut seen_verb = false;
        let mut seen_root = false;
        let mut pending_prep = false;
        for (text, lemma, tag) in tagged {
            let role = match tag {
                PosTag::Determiner => DepRole::Det,
                PosTag::Preposition => {
                    pending_prep = true;
                    DepRole::Prep
                }
                PosTag::Aux => DepRole::Aux,
                PosTag::Verb => {
                    seen_verb = true;
                    pending_prep = false;
                    if seen_root {
                        DepRole::Other
                    } else {
                        seen_root = true;
                        DepRole::Root
                    }
                }
                PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun => {
                    if pending_prep {
                        pending_prep = false;
                        DepRole::Pobj
                    } else if seen_verb {
                        DepRole::Dobj
                    } else {
                        DepRole::Nsubj
                    }
                }
                _ => DepRole::Other,
            };
            tokens.push(Token::new(text, lemma, tag, role));
        }
        Sentence::new(tokens)
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        SENTENCE_BOUNDARY
            .split(text)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.annotate_sentence(segment))
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

fn has_interior_uppercase(word: &str) -> bool {
    word.chars().skip(1).any(|c| c.is_uppercase())
}

fn has_doubled_final_consonant(stem: &str) -> bool {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => a == b && a.is_ascii_alphabetic() && !"aeiou".contains(a),
        _ => false,
    }
}

fn has_verbal_morphology(lower: &str) -> bool {
    let len = lower.len();
    (len > 5 && lower.ends_with("ing"))
        || (len > 3 && lower.ends_with("ed"))
        || (len > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is"))
}
