// src/format/mod.rs
use tracing::{debug, info};

use crate::error::Result;
use crate::process::normalize::{
    normalize, Row, Table, CLOSEST_GENETIC_MATCH, DATE_COLLECTION, DISTRICT, GENETIC_CLUSTER,
    IDCODE, LABNO, SITE_NAME, SOURCE,
};
use crate::process::utils::clean_str;
use crate::process::ParseOptions;

pub mod prefix;

pub use prefix::prefix_for;

/// Separator between consecutive blocks: exactly one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Render one row as a six-line message block.
///
/// Every value is trimmed except the closest genetic match, which is passed
/// through as pasted.
pub fn format_row(row: &Row) -> Result<String> {
    let prefix = prefix_for(row.get(SOURCE));
    let lab_code = format!("{}{}", prefix, clean_str(row.field(LABNO)?));
    let id_code = clean_str(row.field(IDCODE)?);
    let location = format!(
        "*{}, site= {}*",
        clean_str(row.field(DISTRICT)?),
        clean_str(row.field(SITE_NAME)?)
    );
    let collection_date = format!(
        "Collection Date: {}",
        clean_str(row.field(DATE_COLLECTION)?)
    );
    let genetic_cluster = format!(
        "Genetic Cluster: *{}*",
        clean_str(row.field(GENETIC_CLUSTER)?)
    );
    let closest_match = format!(
        "Closest Genetic Match: {}",
        row.field(CLOSEST_GENETIC_MATCH)?
    );

    Ok(format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        lab_code, id_code, location, collection_date, genetic_cluster, closest_match
    ))
}

/// Format every row in order and join the blocks. Any failing row aborts the
/// whole batch.
pub fn format_all(rows: &[Row]) -> Result<String> {
    let blocks = rows
        .iter()
        .map(|row| -> Result<String> {
            let block = format_row(row)?;
            debug!(row = row.index(), "formatted row");
            Ok(block)
        })
        .collect::<Result<Vec<String>>>()?;
    Ok(blocks.join(BLOCK_SEPARATOR))
}

/// Result of a full conversion: the message text plus the table it came
/// from.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: String,
    pub table: Table,
}

/// Parse, validate and format pasted text in one step.
pub fn convert(raw: &str, opts: &ParseOptions) -> Result<Conversion> {
    let table = normalize(raw, opts)?;
    let output = format_all(&table.rows)?;
    info!(blocks = table.rows.len(), bytes = output.len(), "formatted output");
    Ok(Conversion { output, table })
}
