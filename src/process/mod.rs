// src/process/mod.rs
use csv::ReaderBuilder;
use tracing::{debug, trace};

use crate::error::{ConvertError, Result};

pub mod normalize;
pub mod raw_table;
pub mod utils;

pub use raw_table::RawTable;

/// Knobs for reading pasted text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Honour spreadsheet-style `"..."` cells, which may span lines.
    /// Off by default: quotes are ordinary characters.
    pub quoting: bool,
}

/// Split tab-delimited text into a header line and data rows.
///
/// - Blank and whitespace-only lines are skipped.
/// - Short rows are padded with empty cells.
/// - Rows wider than the header are rejected.
#[tracing::instrument(level = "debug", skip(raw), fields(bytes = raw.len()))]
pub fn parse_tab_delimited(raw: &str, opts: &ParseOptions) -> Result<RawTable> {
    if raw.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true) // ragged rows are padded below, not rejected by the reader
        .quoting(opts.quoting)
        .from_reader(raw.as_bytes());

    // a line with no tab and nothing but whitespace is blank; tab-only lines are rows
    let mut records = rdr
        .records()
        .filter(|r| !matches!(r, Ok(rec) if rec.len() == 1 && rec[0].trim().is_empty()));

    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Err(ConvertError::EmptyInput),
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, result) in records.enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        if record.len() > headers.len() {
            return Err(ConvertError::RaggedRow {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() < headers.len() {
            trace!(line, found = row.len(), "padding short row");
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }

    debug!(columns = headers.len(), rows = rows.len(), "parsed input");
    Ok(RawTable { headers, rows })
}
