//! # sentimd-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `sentimd`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON shape of
//! [`AnalysisResult`] and [`AnalysisRecord`], not Rust struct literals.
//! New fields get sensible defaults; removed or renamed fields bump
//! `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (results, records, receipts)
//! * Serialization/Deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Scoring or extraction logic

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The current schema version for all JSON outputs.
pub const SCHEMA_VERSION: u32 = 1;

/// Candidate units whose trimmed length is at or below this many characters
/// are discarded by ingestion.
pub const MIN_UNIT_CHARS: usize = 10;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three sentiment labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSentiment(pub String);

impl fmt::Display for UnknownSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sentiment label: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSentiment {}

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(UnknownSentiment(other.to_string())),
        }
    }
}

/// Where an analyzed text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Typed or pasted by the user.
    #[default]
    Text,
    /// Extracted from an uploaded file.
    File,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Text => "text",
            SourceType::File => "file",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for human and machine readable reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TableFormat {
    /// Markdown table (great for pasting into chat or docs).
    #[default]
    Md,
    /// Tab-separated values (good for piping to other tools).
    Tsv,
    /// JSON (compact).
    Json,
}

/// One keyword with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub term: String,
    pub count: u32,
}

/// Ranked keyword counts.
///
/// Serializes as a JSON object whose key order is the ranking order
/// (most frequent first), so `{"great product": 2, "product": 1}` round-trips
/// with its order intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(Vec<KeywordCount>);

impl Keywords {
    /// Wrap an already-ranked list.
    pub fn new(ranked: Vec<KeywordCount>) -> Self {
        Self(ranked)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordCount> {
        self.0.iter()
    }

    pub fn get(&self, term: &str) -> Option<u32> {
        self.0.iter().find(|k| k.term == term).map(|k| k.count)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|k| k.term.as_str())
    }

    pub fn as_slice(&self) -> &[KeywordCount] {
        &self.0
    }

    /// JSON-encoded form stored in the `keywords` column of a record.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl<'a> IntoIterator for &'a Keywords {
    type Item = &'a KeywordCount;
    type IntoIter = std::slice::Iter<'a, KeywordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Keywords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for k in &self.0 {
            map.serialize_entry(&k.term, &k.count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Keywords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeywordsVisitor;

        impl<'de> Visitor<'de> for KeywordsVisitor {
            type Value = Keywords;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of keyword to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Keywords, A::Error> {
                let mut out = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((term, count)) = access.next_entry::<String, u32>()? {
                    out.push(KeywordCount { term, count });
                }
                Ok(Keywords(out))
            }
        }

        deserializer.deserialize_map(KeywordsVisitor)
    }
}

/// Raw polarity/subjectivity pair produced by a sentiment model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Signed strength in [-1, 1].
    pub polarity: f64,
    /// Objective (0) to subjective (1).
    pub subjectivity: f64,
}

/// The canonical result of analyzing one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Original, unnormalized input.
    pub text: String,
    pub sentiment: Sentiment,
    /// `abs(polarity)`.
    pub confidence: f64,
    pub polarity: f64,
    pub subjectivity: f64,
    pub keywords: Keywords,
    #[serde(default)]
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl AnalysisResult {
    pub fn keywords_json(&self) -> String {
        self.keywords.to_json()
    }

    /// Tag the result with its provenance.
    pub fn with_source(mut self, source_type: SourceType, source_name: Option<String>) -> Self {
        self.source_type = source_type;
        self.source_name = source_name;
        self
    }
}

/// A candidate fragment extracted from an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTextUnit {
    pub text: String,
    /// Original filename of the upload.
    pub source_name: String,
}

impl RawTextUnit {
    pub fn new(text: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_name: source_name.into(),
        }
    }

    /// True when the trimmed text is long enough to be worth analyzing.
    pub fn is_meaningful(&self) -> bool {
        self.text.trim().chars().count() > MIN_UNIT_CHARS
    }
}

/// An analysis attributed to the user who requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedAnalysis {
    pub owner: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// The persisted shape of an analysis, one row per analyzed unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: u64,
    pub owner: String,
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub polarity: f64,
    pub subjectivity: f64,
    /// JSON-encoded keyword map.
    pub keywords: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub source_name: Option<String>,
    /// RFC 3339 timestamp (UTC).
    pub created_at: String,
}

impl AnalysisRecord {
    pub fn from_result(
        id: u64,
        owner: impl Into<String>,
        result: &AnalysisResult,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            text: result.text.clone(),
            sentiment: result.sentiment,
            confidence: result.confidence,
            polarity: result.polarity,
            subjectivity: result.subjectivity,
            keywords: result.keywords_json(),
            source_type: result.source_type,
            source_name: result.source_name.clone(),
            created_at: created_at.into(),
        }
    }

    /// Decode the stored keyword map; a corrupt column yields no keywords.
    pub fn keyword_map(&self) -> Keywords {
        Keywords::from_json(&self.keywords).unwrap_or_default()
    }
}

/// Anything that carries a sentiment label.
///
/// Labels that are not one of the three known values return `None` and are
/// skipped by aggregations.
pub trait SentimentLabel {
    fn sentiment_label(&self) -> Option<Sentiment>;
}

impl SentimentLabel for Sentiment {
    fn sentiment_label(&self) -> Option<Sentiment> {
        Some(*self)
    }
}

impl SentimentLabel for AnalysisResult {
    fn sentiment_label(&self) -> Option<Sentiment> {
        Some(self.sentiment)
    }
}

impl SentimentLabel for OwnedAnalysis {
    fn sentiment_label(&self) -> Option<Sentiment> {
        Some(self.result.sentiment)
    }
}

impl SentimentLabel for AnalysisRecord {
    fn sentiment_label(&self) -> Option<Sentiment> {
        Some(self.sentiment)
    }
}

impl SentimentLabel for str {
    fn sentiment_label(&self) -> Option<Sentiment> {
        self.parse().ok()
    }
}

impl SentimentLabel for String {
    fn sentiment_label(&self) -> Option<Sentiment> {
        self.as_str().sentiment_label()
    }
}

impl<T: SentimentLabel + ?Sized> SentimentLabel for &T {
    fn sentiment_label(&self) -> Option<Sentiment> {
        (**self).sentiment_label()
    }
}

/// Per-label counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Dashboard counters: every item counts toward `total`, known labels also
/// count toward their bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl AnalysisStats {
    pub fn from_labels<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: SentimentLabel,
    {
        let mut stats = Self::default();
        for item in items {
            stats.total += 1;
            match item.sentiment_label() {
                Some(Sentiment::Positive) => stats.positive += 1,
                Some(Sentiment::Negative) => stats.negative += 1,
                Some(Sentiment::Neutral) => stats.neutral += 1,
                None => {}
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "sentimd".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// JSON envelope for one analysis request (a typed text or one file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReceipt {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    pub distribution: SentimentDistribution,
    pub results: Vec<AnalysisResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            text: "Great product".to_string(),
            sentiment: Sentiment::Positive,
            confidence: 0.8,
            polarity: 0.8,
            subjectivity: 0.75,
            keywords: Keywords::new(vec![
                KeywordCount {
                    term: "great product".to_string(),
                    count: 1,
                },
                KeywordCount {
                    term: "great".to_string(),
                    count: 1,
                },
            ]),
            source_type: SourceType::Text,
            source_name: None,
        }
    }

    #[test]
    fn keywords_serialize_in_rank_order() {
        let kw = Keywords::new(vec![
            KeywordCount {
                term: "zeta".to_string(),
                count: 3,
            },
            KeywordCount {
                term: "alpha".to_string(),
                count: 1,
            },
        ]);
        assert_eq!(kw.to_json(), r#"{"zeta":3,"alpha":1}"#);
        let back = Keywords::from_json(&kw.to_json()).unwrap();
        assert_eq!(back, kw);
    }

    #[test]
    fn sentiment_labels_are_lowercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
        assert_eq!("neutral".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert!("Positive".parse::<Sentiment>().is_err());
    }

    #[test]
    fn record_carries_keywords_as_json_string() {
        let record = AnalysisRecord::from_result(7, "alice", &sample(), "2026-01-01T00:00:00Z");
        assert_eq!(record.keywords, r#"{"great product":1,"great":1}"#);
        assert_eq!(record.keyword_map(), sample().keywords);
        assert_eq!(record.source_type, SourceType::Text);
    }

    #[test]
    fn stats_count_unknown_labels_in_total_only() {
        let stats = AnalysisStats::from_labels(["positive", "bogus", "neutral"]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.positive, 1);
        assert_eq!(stats.neutral, 1);
        assert_eq!(stats.negative, 0);
    }

    #[test]
    fn owned_analysis_flattens_result() {
        let owned = OwnedAnalysis {
            owner: "bob".to_string(),
            result: sample().with_source(SourceType::File, Some("a.csv".to_string())),
        };
        let v: serde_json::Value = serde_json::to_value(&owned).unwrap();
        assert_eq!(v["owner"], "bob");
        assert_eq!(v["source_type"], "file");
        assert_eq!(v["source_name"], "a.csv");
        assert_eq!(v["sentiment"], "positive");
    }
}
