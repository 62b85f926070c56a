//! Property-based tests for the lexical sentiment model.

use proptest::prelude::*;
use sentimd_lexicon::{Lexicon, SentimentModel};

fn arb_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "good", "bad", "very", "not", "great", "terrible", "the", "product", "slightly", "never",
        "amazing", "awful", "and", "is", "n't", "pretty", "happy", "broken", ",", ".", "!",
    ])
    .prop_map(String::from)
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 0..30).prop_map(|ws| ws.join(" "))
}

proptest! {
    #[test]
    fn polarity_in_range(text in arb_text()) {
        let s = Lexicon::english().score(&text);
        prop_assert!((-1.0..=1.0).contains(&s.polarity), "polarity {}", s.polarity);
    }

    #[test]
    fn subjectivity_in_range(text in arb_text()) {
        let s = Lexicon::english().score(&text);
        prop_assert!((0.0..=1.0).contains(&s.subjectivity), "subjectivity {}", s.subjectivity);
    }

    #[test]
    fn scoring_is_deterministic(text in arb_text()) {
        let lex = Lexicon::english();
        prop_assert_eq!(lex.score(&text), lex.score(&text));
    }

    #[test]
    fn case_does_not_matter(text in arb_text()) {
        let lex = Lexicon::english();
        prop_assert_eq!(lex.score(&text), lex.score(&text.to_uppercase()));
    }

    #[test]
    fn arbitrary_unicode_never_panics(text in "\\PC{0,200}") {
        let s = Lexicon::english().score(&text);
        prop_assert!(s.polarity.is_finite());
        prop_assert!(s.subjectivity.is_finite());
    }
}
