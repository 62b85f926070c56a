//! BDD-style scenario tests for normalization and tokenization.

use sentimd_text::{Token, clauses, normalize, tokenize, words};

// ── Scenario: normalization ──────────────────────────────────────────

#[test]
fn given_empty_text_when_normalized_then_output_is_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(" \t\n "), "");
}

#[test]
fn given_text_with_urls_when_normalized_then_urls_are_removed() {
    let out = normalize("Loved it https://shop.example.com/item/42 and www.blog.io too");
    assert_eq!(out, "Loved it and too");
}

#[test]
fn given_multiline_text_when_normalized_then_single_spaced() {
    let out = normalize("first line\n\nsecond\tline   third");
    assert_eq!(out, "first line second line third");
}

#[test]
fn given_url_only_text_when_normalized_then_empty() {
    assert_eq!(normalize("https://example.com/only"), "");
}

// ── Scenario: tokenization ───────────────────────────────────────────

#[test]
fn given_sentence_when_tokenized_then_punctuation_becomes_breaks() {
    let tokens = tokenize("Great product, would buy again!");
    let expected = vec![
        Token::Word("Great".to_string()),
        Token::Word("product".to_string()),
        Token::Break,
        Token::Word("would".to_string()),
        Token::Word("buy".to_string()),
        Token::Word("again".to_string()),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn given_negated_contraction_when_split_then_negation_is_its_own_word() {
    assert_eq!(words("It wasn't bad"), vec!["It", "was", "n't", "bad"]);
}

#[test]
fn given_numbers_when_tokenized_then_they_are_words() {
    assert_eq!(words("rated 5 of 10"), vec!["rated", "5", "of", "10"]);
}

#[test]
fn given_symbols_when_tokenized_then_they_are_ignored() {
    assert_eq!(words("$20 & 30% off"), vec!["20", "30", "off"]);
}

#[test]
fn given_clauses_when_split_then_words_group_between_breaks() {
    let cs = clauses("Terrible, broke in a day");
    assert_eq!(cs.len(), 2);
    assert_eq!(cs[0], vec!["Terrible"]);
    assert_eq!(cs[1], vec!["broke", "in", "a", "day"]);
}

#[test]
fn given_only_punctuation_when_split_then_no_clauses() {
    assert!(clauses("?!... ,,").is_empty());
    assert!(tokenize("?!... ,,").is_empty());
}
