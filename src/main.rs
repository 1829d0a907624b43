use anyhow::{Context, Result};
use clap::Parser;
use message_writer::{
    convert,
    export::{write_output, DEFAULT_OUTPUT_FILE},
    preview::render_preview,
    ConvertError, ParseOptions,
};
use std::{fs, io, path::PathBuf, process::ExitCode};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Message Writer: turn pasted tab-delimited sample records into message blocks"
)]
struct Args {
    /// Read the table from this file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Also save the output; a bare flag saves to formatted_output.txt.
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
    output: Option<PathBuf>,
    /// Treat "..." cells as quoted (spreadsheet paste with multi-line cells).
    #[arg(long)]
    quoted: bool,
    /// Print the detected columns and a data preview to stderr.
    #[arg(long)]
    preview: bool,
}

fn main() -> ExitCode {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,message_writer=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "conversion failed");
            let (status, message) = report(&err);
            eprintln!("{}", message);
            ExitCode::from(status)
        }
    }
}

/// Exit status and the one line shown to the user for a failed run.
/// Empty input is not a failure.
fn report(err: &anyhow::Error) -> (u8, String) {
    match err.downcast_ref::<ConvertError>() {
        Some(e) if e.is_empty_input() => (0, e.to_string()),
        Some(e @ ConvertError::MissingColumns(_)) => (1, format!("Error: {}", e)),
        _ => (1, format!("Error processing the data: {:#}", err)),
    }
}

fn run(args: &Args) -> Result<()> {
    // ─── 2) read the pasted table ────────────────────────────────────
    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read input from stdin")?,
    };

    // ─── 3) convert ──────────────────────────────────────────────────
    let opts = ParseOptions {
        quoting: args.quoted,
    };
    let conversion = convert(&raw, &opts)?;

    if args.preview {
        eprint!("{}", render_preview(&conversion.table));
    }

    // ─── 4) emit ─────────────────────────────────────────────────────
    println!("{}", conversion.output);
    if let Some(path) = &args.output {
        write_output(path, &conversion.output)?;
    }

    info!(rows = conversion.table.rows.len(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_missing_columns() {
        let err = anyhow::Error::from(ConvertError::MissingColumns(vec![
            "SOURCE".into(),
            "IDCODE".into(),
        ]));
        assert_eq!(
            report(&err),
            (1, "Error: Missing required columns: SOURCE, IDCODE".to_string())
        );
    }

    #[test]
    fn test_report_processing_errors() {
        let err = anyhow::Error::from(ConvertError::RaggedRow {
            line: 3,
            expected: 8,
            found: 9,
        });
        assert_eq!(
            report(&err),
            (
                1,
                "Error processing the data: line 3: expected 8 fields, saw 9".to_string()
            )
        );

        let err = anyhow::anyhow!("disk gone").context("Failed to read input from stdin");
        let (status, message) = report(&err);
        assert_eq!(status, 1);
        assert_eq!(
            message,
            "Error processing the data: Failed to read input from stdin: disk gone"
        );
    }

    #[test]
    fn test_report_empty_input_is_success() {
        let err = anyhow::Error::from(ConvertError::EmptyInput);
        let (status, message) = report(&err);
        assert_eq!(status, 0);
        assert!(message.starts_with("No data provided."));
    }
}
