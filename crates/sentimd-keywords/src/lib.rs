//! # sentimd-keywords
//!
//! **Tier 2 (Extraction)**
//!
//! Keyword candidates come from two sources:
//!
//! 1. *Phrase chunks*: within a clause, runs of two or more consecutive
//!    content words (anything that is not a closed-class function word or a
//!    number). This approximates noun-phrase chunking without a part-of-speech
//!    tagger: `"a wonderful day"` yields `"wonderful day"`, while a lone noun
//!    yields no phrase. Runs longer than [`MAX_PHRASE_WORDS`] keep their tail.
//! 2. *Words*: lowercased words longer than three characters that are not in
//!    the stop-word list.
//!
//! Candidates are counted and ranked by count, ties broken by first
//! appearance (phrases are listed before words).

use std::collections::{BTreeMap, BTreeSet};

use sentimd_types::{KeywordCount, Keywords};

/// How many keywords a result keeps.
pub const MAX_KEYWORDS: usize = 10;

/// Single words must be longer than this many characters.
pub const MIN_WORD_CHARS: usize = 3;

/// Longest phrase chunk kept, in words.
pub const MAX_PHRASE_WORDS: usize = 4;

/// Words never reported as single-word keywords.
pub const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "know", "want", "been", "good",
    "much", "some", "time", "very", "when", "come", "here", "just", "like", "long", "make",
    "many", "over", "such", "take", "than", "them", "well", "were", "what",
];

/// Closed-class words that end a phrase chunk.
const FUNCTION_WORDS: &[&str] = &[
    // determiners
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "all",
    "both", "either", "neither", "no", "another", "such", "what", "which", "whose",
    // pronouns
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "myself",
    "yourself", "itself", "themselves", "ourselves", "himself", "herself", "who", "whom",
    "everything", "something", "anything", "nothing", "everyone", "someone", "anyone",
    "everybody", "somebody", "anybody",
    // prepositions
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "out", "around", "among", "within", "without", "across", "along",
    "behind", "beyond", "near", "since", "until", "upon", "via", "per", "than", "like",
    // conjunctions
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "though",
    "unless", "whether", "as", "then", "when", "where", "why", "how",
    // auxiliaries and light verbs
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "done", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must", "get", "got", "gets", "go", "goes", "went", "gone",
    // adverbs
    "not", "n't", "very", "really", "too", "just", "also", "only", "even", "still", "again",
    "always", "never", "ever", "already", "here", "there", "now", "soon", "quite", "rather",
    "almost", "much", "more", "most", "less", "least", "well", "back", "away", "maybe",
    "perhaps", "yes", "extremely", "absolutely", "totally", "completely", "highly", "slightly",
    "somewhat",
];

/// Ranks keyword candidates for one text.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: BTreeSet<String>,
    function_words: BTreeSet<String>,
    limit: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            function_words: FUNCTION_WORDS.iter().map(|w| w.to_string()).collect(),
            limit: MAX_KEYWORDS,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn is_content_word(&self, word: &str) -> bool {
        word.chars().any(char::is_alphabetic)
            && !word.starts_with('\'')
            && !self.function_words.contains(word)
    }

    /// Phrase chunks in text order, lowercased.
    pub fn phrases(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for clause in sentimd_text::clauses(text) {
            let mut run: Vec<String> = Vec::new();
            for word in clause {
                let lower = word.to_lowercase();
                if self.is_content_word(&lower) {
                    run.push(lower);
                } else {
                    flush_run(&mut run, &mut out);
                }
            }
            flush_run(&mut run, &mut out);
        }
        out
    }

    /// Lowercased single-word candidates in text order.
    pub fn words(&self, text: &str) -> Vec<String> {
        sentimd_text::words(text)
            .into_iter()
            .map(|w| w.to_lowercase())
            .filter(|w| w.chars().count() > MIN_WORD_CHARS && !self.is_stop_word(w))
            .collect()
    }

    /// Phrases followed by words: the list that gets counted.
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let mut all = self.phrases(text);
        all.extend(self.words(text));
        all
    }

    /// Top keywords of `text` with their counts.
    pub fn extract(&self, text: &str) -> Keywords {
        rank(self.candidates(text), self.limit)
    }
}

fn flush_run(run: &mut Vec<String>, out: &mut Vec<String>) {
    if run.len() >= 2 {
        let start = run.len().saturating_sub(MAX_PHRASE_WORDS);
        out.push(run[start..].join(" "));
    }
    run.clear();
}

/// Count candidates and keep the `limit` most frequent.
///
/// Equal counts keep the order in which the candidate was first seen.
pub fn rank<I>(candidates: I, limit: usize) -> Keywords
where
    I: IntoIterator<Item = String>,
{
    let mut ranked: Vec<KeywordCount> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();

    for term in candidates {
        if term.is_empty() {
            continue;
        }
        match index.get(&term) {
            Some(&i) => ranked[i].count += 1,
            None => {
                index.insert(term.clone(), ranked.len());
                ranked.push(KeywordCount { term, count: 1 });
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    Keywords::new(ranked)
}
