//! Property-based tests for sentimd-text.

use proptest::prelude::*;
use sentimd_text::{Token, clauses, normalize, tokenize, words};

proptest! {
    #[test]
    fn normalize_never_has_edge_or_double_spaces(s in "\\PC{0,200}") {
        let out = normalize(&s);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\n'));
        prop_assert!(!out.contains('\t'));
    }

    #[test]
    fn normalize_is_idempotent(s in "[a-gA-G .,:/\\n\\t]{0,120}") {
        let once = normalize(&s);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_never_leaves_http(s in "[a-g ]{0,40}", url in "[a-z0-9./]{1,20}") {
        let text = format!("{s} http{url} {s}");
        prop_assert!(!normalize(&text).contains("http"));
    }

    #[test]
    fn tokens_never_start_or_end_with_break(s in "\\PC{0,200}") {
        let tokens = tokenize(&s);
        prop_assert!(!matches!(tokens.first(), Some(Token::Break)));
        prop_assert!(!matches!(tokens.last(), Some(Token::Break)));
        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0] == Token::Break && pair[1] == Token::Break));
        }
    }

    #[test]
    fn words_are_never_empty(s in "\\PC{0,200}") {
        for w in words(&s) {
            prop_assert!(!w.is_empty());
            prop_assert!(!w.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn clauses_cover_every_word(s in "[a-zA-Z ,.!?']{0,120}") {
        let flat: Vec<String> = clauses(&s).into_iter().flatten().collect();
        prop_assert_eq!(flat, words(&s));
    }
}
