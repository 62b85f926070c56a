//! CSV extraction.
//!
//! Two stages. The structured stage reads the file as a table with a header
//! row, picks the columns that hold prose and emits their values column by
//! column. Anything it cannot handle becomes a [`ParseError`], and the
//! fallback stage then scans every cell of every row without interpretation.

use tracing::debug;

use crate::error::ParseError;

/// Header substrings that mark a column as prose.
pub const TEXT_COLUMN_HINTS: &[&str] = &[
    "text",
    "comment",
    "review",
    "message",
    "content",
    "description",
];

/// Cell values read as missing.
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const BOOLEAN_VALUES: &[&str] = &["True", "TRUE", "true", "False", "FALSE", "false"];

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Outcome of reading one CSV file.
#[derive(Debug)]
pub enum CsvExtraction {
    Structured {
        /// Names of the columns that contributed.
        columns: Vec<String>,
        units: Vec<String>,
    },
    Fallback {
        reason: ParseError,
        units: Vec<String>,
    },
}

impl CsvExtraction {
    pub fn units(&self) -> &[String] {
        match self {
            CsvExtraction::Structured { units, .. } | CsvExtraction::Fallback { units, .. } => units,
        }
    }

    pub fn into_units(self) -> Vec<String> {
        match self {
            CsvExtraction::Structured { units, .. } | CsvExtraction::Fallback { units, .. } => units,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CsvExtraction::Fallback { .. })
    }
}

/// One parsed column. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<String>>,
}

impl Column {
    /// Holds at least one present value that is neither numeric nor boolean.
    pub fn is_textual(&self) -> bool {
        self.values
            .iter()
            .flatten()
            .any(|v| !is_numeric(v) && !BOOLEAN_VALUES.contains(&v.as_str()))
    }

    fn is_hinted(&self) -> bool {
        let lower = self.name.to_lowercase();
        TEXT_COLUMN_HINTS.iter().any(|hint| lower.contains(hint))
    }
}

fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(BOM).unwrap_or(bytes)
}

/// Decode UTF-8, dropping invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Line on which a quoted field is still open at end of input.
///
/// Quotes only open a field at its start; a quote inside an unquoted field is
/// literal, and `""` inside a quoted field is an escaped quote.
fn unterminated_quote(text: &str) -> Option<u64> {
    #[derive(PartialEq)]
    enum State {
        FieldStart,
        Unquoted,
        Quoted,
        QuoteInQuoted,
    }

    let mut state = State::FieldStart;
    let mut line = 1u64;
    let mut opened_at = 1u64;
    let mut after_cr = false;

    for c in text.chars() {
        state = match (state, c) {
            (State::FieldStart, '"') => {
                opened_at = line;
                State::Quoted
            }
            (State::FieldStart, ',' | '\n' | '\r') => State::FieldStart,
            (State::FieldStart, _) => State::Unquoted,
            (State::Unquoted, ',' | '\n' | '\r') => State::FieldStart,
            (State::Unquoted, _) => State::Unquoted,
            (State::Quoted, '"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            (State::QuoteInQuoted, '"') => State::Quoted,
            (State::QuoteInQuoted, ',' | '\n' | '\r') => State::FieldStart,
            (State::QuoteInQuoted, _) => State::Unquoted,
        };
        // `\r\n` is one line end
        if c == '\r' || (c == '\n' && !after_cr) {
            line += 1;
        }
        after_cr = c == '\r';
    }

    (state == State::Quoted).then_some(opened_at)
}

/// Read `bytes` as a table with a header row.
pub fn parse_table(bytes: &[u8]) -> Result<Vec<Column>, ParseError> {
    let text = std::str::from_utf8(strip_bom(bytes)).map_err(|e| ParseError::Encoding {
        valid_up_to: e.valid_up_to(),
    })?;

    if let Some(line) = unterminated_quote(text) {
        return Err(ParseError::UnterminatedQuote { line });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].trim().is_empty()) {
        return Err(ParseError::Empty);
    }

    let mut columns: Vec<Column> = headers
        .iter()
        .map(|name| Column {
            name: name.to_string(),
            values: Vec::new(),
        })
        .collect();

    for record in rdr.records() {
        let record = record?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() > columns.len() {
            return Err(ParseError::FieldCount {
                line: record.position().map_or(0, |p| p.line()),
                expected: columns.len(),
                found: record.len(),
            });
        }
        for (i, column) in columns.iter_mut().enumerate() {
            let value = record
                .get(i)
                .filter(|v| !NA_MARKERS.contains(v))
                .map(str::to_string);
            column.values.push(value);
        }
    }

    Ok(columns)
}

/// Columns whose values become units: hinted headers if any, otherwise every
/// textual column.
pub fn select_columns(columns: &[Column]) -> Vec<&Column> {
    let hinted: Vec<&Column> = columns.iter().filter(|c| c.is_hinted()).collect();
    if hinted.is_empty() {
        columns.iter().filter(|c| c.is_textual()).collect()
    } else {
        hinted
    }
}

/// Every non-empty cell of every readable row, trimmed.
pub fn scan_cells(bytes: &[u8]) -> Vec<String> {
    let text = decode_lossy(strip_bom(bytes));
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    for record in rdr.records() {
        match record {
            Ok(record) => out.extend(
                record
                    .iter()
                    .map(str::trim)
                    .filter(|cell| !cell.is_empty())
                    .map(str::to_string),
            ),
            Err(err) => debug!(%err, "skipping unreadable CSV record"),
        }
    }
    out
}

/// Run the structured stage, falling back to the cell scan on failure.
pub fn extract_csv(bytes: &[u8]) -> CsvExtraction {
    match parse_table(bytes) {
        Ok(columns) => {
            let selected = select_columns(&columns);
            let names = selected.iter().map(|c| c.name.clone()).collect();
            let units = selected
                .iter()
                .filter(|c| c.is_textual())
                .flat_map(|c| c.values.iter().flatten())
                .map(|v| v.trim().to_string())
                .collect();
            CsvExtraction::Structured {
                columns: names,
                units,
            }
        }
        Err(reason) => CsvExtraction::Fallback {
            units: scan_cells(bytes),
            reason,
        },
    }
}
