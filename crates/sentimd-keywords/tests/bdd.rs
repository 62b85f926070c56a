//! BDD-style scenario tests for keyword extraction.

use sentimd_keywords::{KeywordExtractor, MAX_KEYWORDS, STOP_WORDS};

fn extract(text: &str) -> Vec<(String, u32)> {
    KeywordExtractor::new()
        .extract(text)
        .iter()
        .map(|k| (k.term.clone(), k.count))
        .collect()
}

// ── Scenario: phrase chunks ──────────────────────────────────────────

#[test]
fn given_adjective_noun_pair_then_it_becomes_a_phrase() {
    let ex = KeywordExtractor::new();
    assert_eq!(ex.phrases("Great product, would buy again!"), vec!["great product"]);
}

#[test]
fn given_function_words_then_they_split_phrases() {
    let ex = KeywordExtractor::new();
    assert_eq!(
        ex.phrases("This is a wonderful day and everything is great"),
        vec!["wonderful day"]
    );
}

#[test]
fn given_lone_nouns_then_no_phrase_is_produced() {
    let ex = KeywordExtractor::new();
    assert!(ex.phrases("Terrible, broke in a day").is_empty());
}

// ── Scenario: word filtering ─────────────────────────────────────────

#[test]
fn given_short_words_then_they_are_dropped() {
    let ex = KeywordExtractor::new();
    assert_eq!(ex.words("The cat sat on a big mat"), Vec::<String>::new());
}

#[test]
fn given_stop_words_then_they_are_dropped() {
    let ex = KeywordExtractor::new();
    let words = ex.words("They were very good with them over here");
    assert!(words.is_empty(), "got {words:?}");
}

#[test]
fn given_mixed_case_then_words_are_lowercased() {
    let ex = KeywordExtractor::new();
    assert_eq!(ex.words("Battery BATTERY battery"), vec!["battery"; 3]);
}

// ── Scenario: ranking ────────────────────────────────────────────────

#[test]
fn given_review_then_phrase_comes_before_equal_count_words() {
    let kw = extract("Great product, would buy again!");
    assert_eq!(
        kw,
        vec![
            ("great product".to_string(), 1),
            ("great".to_string(), 1),
            ("product".to_string(), 1),
            ("would".to_string(), 1),
            ("again".to_string(), 1),
        ]
    );
}

#[test]
fn given_repeated_word_then_it_ranks_first() {
    let kw = extract("Battery died. Replaced battery, and the battery died again.");
    assert_eq!(kw[0], ("battery".to_string(), 3));
    // "battery died" is a phrase in two clauses and was seen before "died"
    assert_eq!(kw[1], ("battery died".to_string(), 2));
    assert_eq!(kw[2], ("died".to_string(), 2));
}

#[test]
fn given_many_distinct_words_then_only_ten_are_kept() {
    let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima mike";
    let kw = extract(text);
    assert_eq!(kw.len(), MAX_KEYWORDS);
}

#[test]
fn given_text_without_candidates_then_keywords_are_empty() {
    assert!(extract("it is ok").is_empty());
    assert!(extract("").is_empty());
}

#[test]
fn stop_word_list_is_lowercase_and_long_enough_to_matter() {
    for w in STOP_WORDS {
        assert_eq!(*w, w.to_lowercase());
        assert!(w.chars().count() > 3, "{w} would already be dropped by length");
    }
}

#[test]
fn keywords_serialize_most_frequent_first() {
    let kw = KeywordExtractor::new().extract("refund refund refund delivery");
    let json = serde_json::to_string(&kw).unwrap();
    assert!(json.starts_with(r#"{"refund":3"#), "got {json}");
}
