use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ConvertError, Result};
use crate::process::utils::canonical_header;
use crate::process::{parse_tab_delimited, ParseOptions, RawTable};

pub const SOURCE: &str = "SOURCE";
pub const LABNO: &str = "LABNO";
pub const DISTRICT: &str = "DISTRICT";
pub const SITE_NAME: &str = "SITE NAME";
pub const DATE_COLLECTION: &str = "DATE COLLECTION";
pub const CLOSEST_GENETIC_MATCH: &str = "CLOSEST GENETIC MATCH";
pub const GENETIC_CLUSTER: &str = "GENETIC CLUSTER";
pub const IDCODE: &str = "IDCODE";

/// Columns every pasted table must carry, in the order they are reported
/// when missing.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    SOURCE,
    LABNO,
    DISTRICT,
    SITE_NAME,
    DATE_COLLECTION,
    CLOSEST_GENETIC_MATCH,
    GENETIC_CLUSTER,
    IDCODE,
];

/// One data line, keyed by canonical column name. Values are untrimmed.
///
/// When two columns share a canonical name the first one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    headers: Arc<[String]>,
    cells: Vec<String>,
}

impl Row {
    /// Build a row from canonical headers and its cells. Missing trailing
    /// cells read as empty.
    pub fn new(index: usize, headers: Arc<[String]>, mut cells: Vec<String>) -> Self {
        if cells.len() < headers.len() {
            cells.resize(headers.len(), String::new());
        }
        Row {
            index,
            headers,
            cells,
        }
    }

    /// Zero-based position among the data lines.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
    }

    /// Like [`Row::get`], but a missing column is an error naming this row.
    pub fn field(&self, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| ConvertError::FieldAccess {
            row: self.index,
            field: column.to_string(),
        })
    }

    /// `(column, value)` pairs in header order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(String::as_str))
    }
}

/// A validated table: canonical headers plus one [`Row`] per data line.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Arc<[String]>,
    pub rows: Vec<Row>,
}

/// Required columns absent from `headers`, in [`REQUIRED_COLUMNS`] order.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|req| !headers.iter().any(|h| h.as_ref() == **req))
        .map(|req| req.to_string())
        .collect()
}

/// Canonicalize the headers of a parsed table, check the required columns
/// and build rows.
pub fn validate(raw: RawTable) -> Result<Table> {
    let headers: Vec<String> = raw.headers.iter().map(|h| canonical_header(h)).collect();
    debug!(?headers, "detected columns");

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(ConvertError::MissingColumns(missing));
    }

    let headers: Arc<[String]> = headers.into();
    let rows: Vec<Row> = raw
        .rows
        .into_iter()
        .enumerate()
        .map(|(i, cells)| Row::new(i, Arc::clone(&headers), cells))
        .collect();

    Ok(Table { headers, rows })
}

/// Parse pasted text and validate it into a [`Table`].
#[tracing::instrument(level = "info", skip(raw, opts), fields(bytes = raw.len()))]
pub fn normalize(raw: &str, opts: &ParseOptions) -> Result<Table> {
    let table = validate(parse_tab_delimited(raw, opts)?)?;
    info!(rows = table.rows.len(), "normalized table");
    Ok(table)
}
