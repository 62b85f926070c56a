//! # sentimd-format
//!
//! **Tier 5 (Formatting)**
//!
//! Renders analysis receipts, result pages and dashboard stats as Markdown,
//! TSV or JSON, and writes the CSV export.
//!
//! ## What belongs here
//! * Markdown/TSV table rendering
//! * JSON envelopes
//! * CSV export and its file name
//!
//! ## What does NOT belong here
//! * Computing stats (see `sentimd-store`)
//! * CLI arg parsing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use time::OffsetDateTime;
use time::macros::format_description;

use sentimd_store::{DashboardStats, RecordPage};
use sentimd_types::{
    AnalysisReceipt, AnalysisRecord, AnalysisResult, SCHEMA_VERSION, Sentiment,
    SentimentDistribution, SourceType, TableFormat, ToolInfo,
};

/// Longest text shown in a Markdown cell before it is cut.
pub const MD_TEXT_WIDTH: usize = 80;

/// Keywords shown per row in Markdown tables.
pub const MD_KEYWORDS: usize = 3;

/// Column order of the CSV export.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "id",
    "text",
    "sentiment",
    "confidence",
    "polarity",
    "subjectivity",
    "keywords",
    "source_type",
    "source_name",
    "created_at",
];

/// JSON wrapper for listings.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub mode: &'a str,
    #[serde(flatten)]
    pub data: &'a T,
}

impl<'a, T: Serialize> Envelope<'a, T> {
    pub fn new(mode: &'a str, data: &'a T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tool: ToolInfo::current(),
            mode,
            data,
        }
    }
}

/// Receipt for one analysis request.
pub fn analysis_receipt(
    source_type: SourceType,
    source_name: Option<String>,
    results: Vec<AnalysisResult>,
) -> AnalysisReceipt {
    let mut distribution = SentimentDistribution::default();
    for r in &results {
        distribution.record(r.sentiment);
    }
    AnalysisReceipt {
        schema_version: SCHEMA_VERSION,
        tool: ToolInfo::current(),
        source_type,
        source_name,
        distribution,
        results,
    }
}

// ---------------------
// Cell helpers
// ---------------------

fn md_cell(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let cut = if flat.chars().count() > MD_TEXT_WIDTH {
        let mut s: String = flat.chars().take(MD_TEXT_WIDTH - 1).collect();
        s.push('…');
        s
    } else {
        flat
    };
    cut.replace('|', "\\|")
}

fn tsv_cell(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

fn md_keywords<'a>(terms: impl Iterator<Item = &'a str>) -> String {
    terms
        .take(MD_KEYWORDS)
        .map(md_cell)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_distribution_md(s: &mut String, dist: &SentimentDistribution) {
    s.push_str("|Sentiment|Count|\n");
    s.push_str("|---|---:|\n");
    for label in Sentiment::ALL {
        s.push_str(&format!("|{}|{}|\n", label, dist.get(label)));
    }
}

// ---------------------
// Analysis output
// ---------------------

pub fn render_analysis(receipt: &AnalysisReceipt, format: TableFormat) -> Result<String> {
    Ok(match format {
        TableFormat::Md => render_analysis_md(receipt),
        TableFormat::Tsv => render_analysis_tsv(&receipt.results),
        TableFormat::Json => format!("{}\n", serde_json::to_string(receipt)?),
    })
}

fn render_analysis_md(receipt: &AnalysisReceipt) -> String {
    let mut s = String::new();

    if let Some(name) = &receipt.source_name {
        s.push_str(&format!("**Source**: `{}`\n\n", name));
    }

    s.push_str("|#|Sentiment|Confidence|Polarity|Subjectivity|Text|Keywords|\n");
    s.push_str("|---:|---|---:|---:|---:|---|---|\n");
    for (i, r) in receipt.results.iter().enumerate() {
        s.push_str(&format!(
            "|{}|{}|{:.2}|{:.3}|{:.3}|{}|{}|\n",
            i + 1,
            r.sentiment,
            r.confidence,
            r.polarity,
            r.subjectivity,
            md_cell(&r.text),
            md_keywords(r.keywords.terms())
        ));
    }

    if receipt.results.len() > 1 {
        s.push('\n');
        render_distribution_md(&mut s, &receipt.distribution);
    }

    s
}

fn render_analysis_tsv(results: &[AnalysisResult]) -> String {
    let mut s = String::new();
    s.push_str("Sentiment\tConfidence\tPolarity\tSubjectivity\tText\tKeywords\n");
    for r in results {
        s.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            r.sentiment,
            r.confidence,
            r.polarity,
            r.subjectivity,
            tsv_cell(&r.text),
            r.keywords_json()
        ));
    }
    s
}

// ---------------------
// Result listings
// ---------------------

pub fn render_page(page: &RecordPage, format: TableFormat) -> Result<String> {
    Ok(match format {
        TableFormat::Md => render_page_md(page),
        TableFormat::Tsv => render_records_tsv(&page.records),
        TableFormat::Json => format!("{}\n", serde_json::to_string(&Envelope::new("results", page))?),
    })
}

fn render_records_md(s: &mut String, records: &[AnalysisRecord]) {
    s.push_str("|Id|Created|Sentiment|Confidence|Source|Text|Keywords|\n");
    s.push_str("|---:|---|---|---:|---|---|---|\n");
    for r in records {
        let kw = r.keyword_map();
        s.push_str(&format!(
            "|{}|{}|{}|{:.2}|{}|{}|{}|\n",
            r.id,
            r.created_at,
            r.sentiment,
            r.confidence,
            md_cell(r.source_name.as_deref().unwrap_or(r.source_type.as_str())),
            md_cell(&r.text),
            md_keywords(kw.terms())
        ));
    }
}

fn render_page_md(page: &RecordPage) -> String {
    let mut s = String::new();
    if page.total == 0 {
        s.push_str("No analyses yet.\n");
        return s;
    }
    s.push_str(&format!(
        "Page {} of {} ({} results)\n\n",
        page.page, page.pages, page.total
    ));
    render_records_md(&mut s, &page.records);
    s
}

fn render_records_tsv(records: &[AnalysisRecord]) -> String {
    let mut s = String::new();
    s.push_str("Id\tCreated\tSentiment\tConfidence\tPolarity\tSubjectivity\tSourceType\tSource\tText\tKeywords\n");
    for r in records {
        s.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            r.id,
            r.created_at,
            r.sentiment,
            r.confidence,
            r.polarity,
            r.subjectivity,
            r.source_type,
            tsv_cell(r.source_name.as_deref().unwrap_or("")),
            tsv_cell(&r.text),
            r.keywords
        ));
    }
    s
}

// ---------------------
// Dashboard
// ---------------------

pub fn render_stats(stats: &DashboardStats, format: TableFormat) -> Result<String> {
    Ok(match format {
        TableFormat::Md => render_stats_md(stats),
        TableFormat::Tsv => render_stats_tsv(stats),
        TableFormat::Json => format!("{}\n", serde_json::to_string(&Envelope::new("stats", stats))?),
    })
}

fn render_stats_md(dash: &DashboardStats) -> String {
    let mut s = String::new();
    s.push_str("|Total|Positive|Negative|Neutral|\n");
    s.push_str("|---:|---:|---:|---:|\n");
    s.push_str(&format!(
        "|{}|{}|{}|{}|\n",
        dash.stats.total, dash.stats.positive, dash.stats.negative, dash.stats.neutral
    ));

    if !dash.recent.is_empty() {
        s.push_str("\n**Recent**\n\n");
        render_records_md(&mut s, &dash.recent);
    }
    s
}

fn render_stats_tsv(dash: &DashboardStats) -> String {
    format!(
        "Total\tPositive\tNegative\tNeutral\n{}\t{}\t{}\t{}\n",
        dash.stats.total, dash.stats.positive, dash.stats.negative, dash.stats.neutral
    )
}

// ---------------------
// CSV export
// ---------------------

/// `sentiment_analysis_<owner>_<YYYYmmdd_HHMMSS>.csv`.
///
/// Characters of `owner` outside ASCII letters, digits, `-` and `_` become `_`.
pub fn export_file_name(owner: &str, at: OffsetDateTime) -> Result<String> {
    let stamp = at
        .format(format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .context("Failed to format export timestamp")?;
    let owner: String = owner
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    Ok(format!("sentiment_analysis_{}_{}.csv", owner, stamp))
}

pub fn write_export_csv<W: Write>(out: W, records: &[AnalysisRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(EXPORT_COLUMNS)?;

    for r in records {
        wtr.write_record([
            r.id.to_string(),
            r.text.clone(),
            r.sentiment.to_string(),
            r.confidence.to_string(),
            r.polarity.to_string(),
            r.subjectivity.to_string(),
            r.keywords.clone(),
            r.source_type.to_string(),
            r.source_name.clone().unwrap_or_default(),
            r.created_at.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_export_to_file(path: &Path, records: &[AnalysisRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_export_csv(&mut out, records)?;
    out.flush()?;
    Ok(())
}
