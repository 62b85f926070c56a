//! # sentimd-lexicon
//!
//! **Tier 2 (Scoring)**
//!
//! A bag-of-words sentiment model. Each known word carries a polarity and a
//! subjectivity; degree adverbs scale the word they modify and negators flip
//! it. The text score is the mean over every scored word.
//!
//! ## What belongs here
//! * The [`SentimentModel`] seam and the built-in [`Lexicon`]
//! * English word tables
//!
//! ## What does NOT belong here
//! * Label thresholds (see `sentimd-analysis`)
//! * Keyword extraction, I/O

mod english;

use std::collections::{BTreeMap, BTreeSet};

use sentimd_types::SentimentScore;

/// Multiplier applied to the polarity of a negated sentiment word.
pub const NEGATION_FACTOR: f64 = -0.5;

/// How many following words of the same clause a negator reaches.
pub const NEGATION_WINDOW: usize = 3;

/// Anything that can turn normalized text into polarity and subjectivity.
pub trait SentimentModel: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Polarity and subjectivity of one lexicon word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Word-level sentiment lexicon with modifier and negation rules.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: BTreeMap<String, Entry>,
    modifiers: BTreeMap<String, f64>,
    negators: BTreeSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// An empty lexicon: every text scores `(0.0, 0.0)`.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            modifiers: BTreeMap::new(),
            negators: BTreeSet::new(),
        }
    }

    /// The built-in English lexicon.
    pub fn english() -> Self {
        let mut lex = Self::empty();
        for (word, polarity, subjectivity) in english::ENTRIES {
            lex.insert(word, *polarity, *subjectivity);
        }
        for (word, factor) in english::MODIFIERS {
            lex.insert_modifier(word, *factor);
        }
        for word in english::NEGATORS {
            lex.insert_negator(word);
        }
        lex
    }

    pub fn insert(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.entries.insert(
            word.to_lowercase(),
            Entry {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
    }

    pub fn insert_modifier(&mut self, word: &str, factor: f64) {
        self.modifiers.insert(word.to_lowercase(), factor);
    }

    pub fn insert_negator(&mut self, word: &str) {
        self.negators.insert(word.to_lowercase());
    }

    pub fn entry(&self, word: &str) -> Option<Entry> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    /// A modifier only counts as one when it leads into a sentiment word or
    /// another modifier; otherwise it is read as a plain word.
    fn modifier_at(&self, clause: &[String], i: usize) -> Option<f64> {
        let factor = *self.modifiers.get(&clause[i])?;
        let next = clause.get(i + 1)?;
        if self.entries.contains_key(next) || self.modifiers.contains_key(next) {
            Some(factor)
        } else {
            None
        }
    }

    /// Scored words of one clause, in order.
    fn assess_clause(&self, clause: &[String], out: &mut Vec<Entry>) {
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for i in 0..clause.len() {
            let word = clause[i].as_str();

            if self.is_negator(word) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(factor) = self.modifier_at(clause, i) {
                intensity *= factor;
                continue;
            }
            if let Some(entry) = self.entry(word) {
                let mut polarity = entry.polarity * intensity;
                if negation_left > 0 {
                    polarity *= NEGATION_FACTOR;
                }
                out.push(Entry {
                    polarity: polarity.clamp(-1.0, 1.0),
                    subjectivity: (entry.subjectivity * intensity).clamp(0.0, 1.0),
                });
                intensity = 1.0;
                negation_left = 0;
                continue;
            }

            intensity = 1.0;
            negation_left = negation_left.saturating_sub(1);
        }
    }

    /// Every scored word of `text` after modifiers and negation.
    pub fn assessments(&self, text: &str) -> Vec<Entry> {
        let mut out = Vec::new();
        for clause in sentimd_text::clauses(text) {
            let lowered: Vec<String> = clause.iter().map(|w| w.to_lowercase()).collect();
            self.assess_clause(&lowered, &mut out);
        }
        out
    }
}

impl SentimentModel for Lexicon {
    fn score(&self, text: &str) -> SentimentScore {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return SentimentScore::default();
        }
        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|e| e.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|e| e.subjectivity).sum::<f64>() / n;
        SentimentScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}
