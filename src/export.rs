use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

/// File name offered when the output is saved without an explicit path.
pub const DEFAULT_OUTPUT_FILE: &str = "formatted_output.txt";
pub const OUTPUT_MIME: &str = "text/plain";

/// Save the formatted output byte-for-byte, with no trailing newline added.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    info!(path = %path.display(), mime = OUTPUT_MIME, bytes = text.len(), "saved output");
    Ok(())
}
