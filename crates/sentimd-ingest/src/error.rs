//! Error taxonomy for the ingestion pipeline.

use std::io;

use thiserror::Error;

/// Failures surfaced to the caller of the pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File type not allowed. Please upload TXT or CSV files. (got {filename:?})")]
    UnsupportedFileType { filename: String },

    #[error("Failed to store upload: {0}")]
    Io(#[from] io::Error),

    #[error("Error processing file: {0}")]
    Processing(#[source] io::Error),
}

/// Why the structured CSV reading was abandoned.
///
/// Never returned as an error by the pipeline: it travels inside
/// [`crate::CsvExtraction::Fallback`] as the reason the fallback scan ran.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid UTF-8 after byte {valid_up_to}")]
    Encoding { valid_up_to: usize },

    #[error("no columns to parse from file")]
    Empty,

    #[error("EOF inside quoted field opened on line {line}")]
    UnterminatedQuote { line: u64 },

    #[error("expected {expected} fields in line {line}, saw {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
