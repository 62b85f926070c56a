//! # sentimd-ingest
//!
//! **Tier 3 (Ingestion)**
//!
//! Turns an uploaded TXT or CSV file into analysis results:
//!
//! ```text
//! received -> validated -> parsed -> filtered -> analyzed -> cleaned up
//! ```
//!
//! Validation only looks at the extension. Parsing never interprets TXT
//! beyond line splitting; CSV goes through [`extract_csv`], which degrades to
//! a plain cell scan instead of failing. Fragments of ten characters or
//! fewer are dropped before analysis. Extraction is all-or-nothing per file.
//!
//! ## What belongs here
//! * Extension checks and filename sanitizing
//! * TXT/CSV text extraction
//! * The [`Upload`] guard and [`FileProcessor`]
//!
//! ## What does NOT belong here
//! * Scoring rules (see `sentimd-analysis`)
//! * Persisting results

mod error;
mod table;
mod upload;

use std::fs;
use std::path::{Path, PathBuf};

use sentimd_analysis::Analyzer;
use sentimd_lexicon::{Lexicon, SentimentModel};
use sentimd_types::{OwnedAnalysis, RawTextUnit, SourceType};
use tracing::{debug, info, warn};

pub use error::{IngestError, ParseError};
pub use table::{
    CsvExtraction, Column, NA_MARKERS, TEXT_COLUMN_HINTS, decode_lossy, extract_csv, parse_table,
    scan_cells, select_columns,
};
pub use upload::{Upload, secure_filename};

/// Accepted upload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Txt,
    Csv,
}

impl FileKind {
    /// Kind named by the text after the last `.`, case-insensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(FileKind::Txt),
            "csv" => Some(FileKind::Csv),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Txt => "txt",
            FileKind::Csv => "csv",
        }
    }
}

fn validate(filename: &str) -> Result<FileKind, IngestError> {
    FileKind::from_filename(filename).ok_or_else(|| IngestError::UnsupportedFileType {
        filename: filename.to_string(),
    })
}

/// Trimmed lines of a text file, decoded as UTF-8 with invalid bytes dropped.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn txt_lines(bytes: &[u8]) -> Vec<String> {
    decode_lossy(bytes)
        .replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(|line| line.trim().to_string())
        .collect()
}

/// Extract the meaningful text units of the file at `path`.
///
/// `filename` decides the file kind and becomes each unit's `source_name`.
pub fn extract_units(path: &Path, filename: &str) -> Result<Vec<RawTextUnit>, IngestError> {
    let kind = validate(filename)?;
    extract_kind(path, kind, filename)
}

fn extract_kind(
    path: &Path,
    kind: FileKind,
    source_name: &str,
) -> Result<Vec<RawTextUnit>, IngestError> {
    let bytes = fs::read(path).map_err(IngestError::Processing)?;

    let candidates = match kind {
        FileKind::Txt => txt_lines(&bytes),
        FileKind::Csv => {
            let extraction = extract_csv(&bytes);
            match &extraction {
                CsvExtraction::Structured { columns, .. } => {
                    debug!(file = source_name, ?columns, "structured CSV read")
                }
                CsvExtraction::Fallback { reason, .. } => {
                    warn!(file = source_name, %reason, "CSV fallback scan")
                }
            }
            extraction.into_units()
        }
    };

    let total = candidates.len();
    let units: Vec<RawTextUnit> = candidates
        .into_iter()
        .map(|text| RawTextUnit::new(text, source_name))
        .filter(RawTextUnit::is_meaningful)
        .collect();
    debug!(file = source_name, total, kept = units.len(), "filtered text units");
    Ok(units)
}

/// Analyze each unit as a file-sourced result owned by `owner`.
pub fn analyze_units<M: SentimentModel>(
    analyzer: &Analyzer<M>,
    units: &[RawTextUnit],
    owner: &str,
) -> Vec<OwnedAnalysis> {
    units
        .iter()
        .filter_map(|unit| {
            let result = analyzer
                .analyze(&unit.text)?
                .with_source(SourceType::File, Some(unit.source_name.clone()));
            Some(OwnedAnalysis {
                owner: owner.to_string(),
                result,
            })
        })
        .collect()
}

/// Saves uploads into a directory and runs them through the pipeline.
#[derive(Debug, Clone)]
pub struct FileProcessor<M = Lexicon> {
    analyzer: Analyzer<M>,
    upload_dir: PathBuf,
}

impl FileProcessor<Lexicon> {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self::with_analyzer(Analyzer::new(), upload_dir)
    }
}

impl<M: SentimentModel> FileProcessor<M> {
    pub fn with_analyzer(analyzer: Analyzer<M>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            analyzer,
            upload_dir: upload_dir.into(),
        }
    }

    pub fn analyzer(&self) -> &Analyzer<M> {
        &self.analyzer
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Validate `filename` and write `bytes` under its sanitized name.
    ///
    /// The extension is checked before anything touches the disk.
    pub fn save_upload(&self, filename: &str, bytes: &[u8]) -> Result<Upload, IngestError> {
        let kind = validate(filename)?;
        let safe = secure_filename(filename);

        fs::create_dir_all(&self.upload_dir)?;
        let path = self.upload_dir.join(&safe);
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "saved upload");

        Ok(Upload::new(path, safe, kind))
    }

    /// Extract, filter and analyze a saved upload.
    pub fn process(&self, upload: &Upload, owner: &str) -> Result<Vec<OwnedAnalysis>, IngestError> {
        let units = extract_kind(upload.path(), upload.kind(), upload.file_name())?;
        let results = analyze_units(&self.analyzer, &units, owner);
        info!(
            file = upload.file_name(),
            units = units.len(),
            results = results.len(),
            "processed upload"
        );
        Ok(results)
    }

    /// Save, process and clean up in one call.
    pub fn process_bytes(
        &self,
        filename: &str,
        bytes: &[u8],
        owner: &str,
    ) -> Result<Vec<OwnedAnalysis>, IngestError> {
        let upload = self.save_upload(filename, bytes)?;
        let results = self.process(&upload, owner);
        upload.cleanup();
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(FileKind::from_filename("a.TXT"), Some(FileKind::Txt));
        assert_eq!(FileKind::from_filename("b.tar.Csv"), Some(FileKind::Csv));
        assert_eq!(FileKind::from_filename("csv"), None);
        assert_eq!(FileKind::from_filename("notes.md"), None);
    }

    #[test]
    fn txt_lines_are_trimmed() {
        assert_eq!(txt_lines(b" a \r\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        assert_eq!(txt_lines(b"a\rb\r\nc"), vec!["a", "b", "c"]);
    }
}
