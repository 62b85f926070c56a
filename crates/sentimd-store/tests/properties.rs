//! Property-based tests for paging.

use proptest::prelude::*;
use sentimd_store::RecordStore;
use sentimd_types::{AnalysisResult, Keywords, Sentiment, SourceType};
use tempfile::TempDir;

fn neutral(i: usize) -> AnalysisResult {
    AnalysisResult {
        text: format!("row {i}"),
        sentiment: Sentiment::Neutral,
        confidence: 0.0,
        polarity: 0.0,
        subjectivity: 0.0,
        keywords: Keywords::default(),
        source_type: SourceType::Text,
        source_name: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pages_cover_every_record_once(n in 0usize..40, per_page in 1usize..12) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let batch: Vec<_> = (0..n).map(neutral).collect();
        store.append("owner", &batch).unwrap();

        let first = store.page("owner", 1, per_page).unwrap();
        let mut seen = Vec::new();
        for page in 1..=first.pages.max(1) {
            seen.extend(store.page("owner", page, per_page).unwrap().records.into_iter().map(|r| r.id));
        }
        let expected: Vec<u64> = (1..=n as u64).rev().collect();
        prop_assert_eq!(seen, expected);
    }
}
