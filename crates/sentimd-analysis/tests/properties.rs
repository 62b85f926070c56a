//! Property-based tests for the analysis invariants.

use proptest::prelude::*;
use sentimd_analysis::{Analyzer, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, classify};
use sentimd_types::Sentiment;

fn arb_review() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "the", "product", "is", "not", "very", "great", "terrible", "awful", "good", "bad",
            "service", "slightly", "disappointing", "excellent", "delivery", ",", "!", "never",
            "http://spam.example", "www.ads.io", "\n", "quite", "happy", "broken",
        ]),
        1..25,
    )
    .prop_map(|ws| ws.join(" "))
}

proptest! {
    #[test]
    fn confidence_is_abs_polarity(text in arb_review()) {
        if let Some(r) = Analyzer::new().analyze(&text) {
            prop_assert_eq!(r.confidence, r.polarity.abs());
            prop_assert!((0.0..=1.0).contains(&r.confidence));
        }
    }

    #[test]
    fn label_follows_thresholds(text in arb_review()) {
        if let Some(r) = Analyzer::new().analyze(&text) {
            let expected = if r.polarity > POSITIVE_THRESHOLD {
                Sentiment::Positive
            } else if r.polarity < NEGATIVE_THRESHOLD {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            };
            prop_assert_eq!(r.sentiment, expected);
        }
    }

    #[test]
    fn analysis_is_deterministic(text in arb_review()) {
        let analyzer = Analyzer::new();
        let a = analyzer.analyze(&text);
        let b = analyzer.analyze(&text);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn non_blank_text_always_yields_a_result(text in "\\PC*[a-z]\\PC*") {
        prop_assert!(Analyzer::new().analyze(&text).is_some());
    }

    #[test]
    fn batch_matches_individual_calls(texts in prop::collection::vec(arb_review(), 0..8)) {
        let analyzer = Analyzer::new();
        let batch = analyzer.analyze_batch(&texts);
        let single: Vec<_> = texts.iter().filter_map(|t| analyzer.analyze(t)).collect();
        prop_assert_eq!(batch, single);
    }

    #[test]
    fn classify_is_monotonic(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |s: Sentiment| match s {
            Sentiment::Negative => 0,
            Sentiment::Neutral => 1,
            Sentiment::Positive => 2,
        };
        prop_assert!(rank(classify(lo)) <= rank(classify(hi)));
    }
}
