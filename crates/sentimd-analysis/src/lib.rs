//! # sentimd-analysis
//!
//! **Tier 3 (Orchestration)**
//!
//! Assembles one [`AnalysisResult`] per text: normalize, score, label,
//! extract keywords. The [`Analyzer`] holds only read-only configuration, so
//! one instance can serve any number of concurrent callers.
//!
//! ## What belongs here
//! * Label thresholds and classification
//! * Single and batch analysis
//! * Label aggregation
//!
//! ## What does NOT belong here
//! * File parsing (see `sentimd-ingest`)
//! * Persistence or rendering

use sentimd_keywords::KeywordExtractor;
use sentimd_lexicon::{Lexicon, SentimentModel};
use sentimd_types::{
    AnalysisResult, Keywords, Sentiment, SentimentDistribution, SentimentLabel, SentimentScore,
    SourceType,
};

/// Polarity strictly above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity strictly below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// The polarity cut-offs used to derive a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: POSITIVE_THRESHOLD,
            negative: NEGATIVE_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, polarity: f64) -> Sentiment {
        if polarity > self.positive {
            Sentiment::Positive
        } else if polarity < self.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Label for `polarity` under the standard thresholds.
pub fn classify(polarity: f64) -> Sentiment {
    Thresholds::default().classify(polarity)
}

/// Scores text and packages the outcome.
#[derive(Debug, Clone)]
pub struct Analyzer<M = Lexicon> {
    model: M,
    keywords: KeywordExtractor,
    thresholds: Thresholds,
}

impl Default for Analyzer<Lexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer<Lexicon> {
    /// Analyzer backed by the built-in English lexicon.
    pub fn new() -> Self {
        Self::with_model(Lexicon::english())
    }
}

impl<M: SentimentModel> Analyzer<M> {
    pub fn with_model(model: M) -> Self {
        Self {
            model,
            keywords: KeywordExtractor::new(),
            thresholds: Thresholds::default(),
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Polarity and subjectivity of already-normalized text.
    pub fn score(&self, normalized: &str) -> SentimentScore {
        self.model.score(normalized)
    }

    /// Ranked keywords of already-normalized text.
    pub fn extract_keywords(&self, normalized: &str) -> Keywords {
        self.keywords.extract(normalized)
    }

    /// Analyze one raw text.
    ///
    /// Returns `None` when `raw` is empty or whitespace only. The stored
    /// `text` is `raw` itself, not the normalized form.
    pub fn analyze(&self, raw: &str) -> Option<AnalysisResult> {
        if raw.trim().is_empty() {
            return None;
        }

        let normalized = sentimd_text::normalize(raw);
        let score = self.score(&normalized);
        let keywords = self.extract_keywords(&normalized);

        Some(AnalysisResult {
            text: raw.to_string(),
            sentiment: self.thresholds.classify(score.polarity),
            confidence: score.polarity.abs(),
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            keywords,
            source_type: SourceType::Text,
            source_name: None,
        })
    }

    /// Analyze every text in order, dropping the ones that yield nothing.
    pub fn analyze_batch<I, S>(&self, texts: I) -> Vec<AnalysisResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .filter_map(|t| self.analyze(t.as_ref()))
            .collect()
    }
}

/// Count labels. Unknown labels are skipped; empty input is all zeros.
pub fn sentiment_distribution<I>(items: I) -> SentimentDistribution
where
    I: IntoIterator,
    I::Item: SentimentLabel,
{
    let mut dist = SentimentDistribution::default();
    for item in items {
        if let Some(label) = item.sentiment_label() {
            dist.record(label);
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(classify(0.1), Sentiment::Neutral);
        assert_eq!(classify(-0.1), Sentiment::Neutral);
        assert_eq!(classify(0.1000001), Sentiment::Positive);
        assert_eq!(classify(-0.1000001), Sentiment::Negative);
        assert_eq!(classify(0.0), Sentiment::Neutral);
    }

    struct Fixed(f64);

    impl SentimentModel for Fixed {
        fn score(&self, _text: &str) -> SentimentScore {
            SentimentScore {
                polarity: self.0,
                subjectivity: 0.5,
            }
        }
    }

    #[test]
    fn custom_model_drives_label_and_confidence() {
        let analyzer = Analyzer::with_model(Fixed(-0.4));
        let r = analyzer.analyze("anything at all").unwrap();
        assert_eq!(r.sentiment, Sentiment::Negative);
        assert_eq!(r.confidence, 0.4);
        assert_eq!(r.subjectivity, 0.5);
    }

    #[test]
    fn url_only_text_still_yields_a_neutral_result() {
        let r = Analyzer::new().analyze("https://example.com/x").unwrap();
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.text, "https://example.com/x");
        assert!(r.keywords.is_empty());
    }
}
