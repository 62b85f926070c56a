//! # sentimd-text
//!
//! **Tier 1 (Text Primitives)**
//!
//! Normalization and tokenization shared by the scorer and the keyword
//! extractor. Everything here is pure and allocation-only.
//!
//! ## What belongs here
//! * URL stripping and whitespace collapsing
//! * Word / clause tokenization
//!
//! ## What does NOT belong here
//! * Lexicons or stop-word lists
//! * Scoring, ranking, I/O

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www.\S+").expect("valid regex literal"));

/// Strip URLs and collapse whitespace runs to single spaces.
///
/// ```
/// assert_eq!(
///     sentimd_text::normalize("  see https://x.io/a \n\tnow "),
///     "see now"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    let stripped = URL.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A word or a clause boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Break,
}

impl Token {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w),
            Token::Break => None,
        }
    }
}

fn is_clause_break(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '"'
            | '\u{201C}'
            | '\u{201D}'
            | '\u{2026}'
            | '\u{2014}'
            | '\u{2013}'
            | '-'
            | '|'
            | '/'
            | '\n'
    )
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}

/// Split `text` into words and clause breaks.
///
/// Words are runs of alphanumerics that may contain internal apostrophes or
/// hyphens (`state-of-the-art`, `don't`). Contractions are split the way
/// English word tokenizers usually do: `don't` becomes `do` + `n't` and
/// `it's` becomes `it` + `'s`. Consecutive breaks collapse into one.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_alphanumeric() {
            let mut word = String::new();
            while i < chars.len() {
                let ch = chars[i];
                if ch.is_alphanumeric() {
                    word.push(ch);
                } else if is_joiner(ch) && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric()) {
                    word.push(if ch == '\u{2019}' { '\'' } else { ch });
                } else {
                    break;
                }
                i += 1;
            }
            push_word(&mut out, &word);
            continue;
        }
        if is_clause_break(c) && !matches!(out.last(), Some(Token::Break) | None) {
            out.push(Token::Break);
        }
        i += 1;
    }

    if matches!(out.last(), Some(Token::Break)) {
        out.pop();
    }
    out
}

fn push_word(out: &mut Vec<Token>, word: &str) {
    let lower = word.to_lowercase();
    if lower == "n't" {
        out.push(Token::Word(word.to_string()));
        return;
    }
    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = word.len() - 3;
        out.push(Token::Word(word[..cut].to_string()));
        out.push(Token::Word(word[cut..].to_string()));
        return;
    }
    if let Some(pos) = word.find('\'') {
        if pos > 0 {
            out.push(Token::Word(word[..pos].to_string()));
            out.push(Token::Word(word[pos..].to_string()));
            return;
        }
    }
    out.push(Token::Word(word.to_string()));
}

/// Word tokens only, in text order.
pub fn words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter_map(|t| match t {
            Token::Word(w) => Some(w),
            Token::Break => None,
        })
        .collect()
}

/// Word runs between clause breaks. Empty clauses are dropped.
pub fn clauses(text: &str) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for token in tokenize(text) {
        match token {
            Token::Word(w) => current.push(w),
            Token::Break => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
