//! CLI command for reports
//!
//! Reads one transaction file and writes one report to a file or stdout.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::export::{OutputFormat, RenderOptions};
use crate::reports::generate_report;

/// Arguments for generating a report
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Path to a JSON or CSV file containing transaction data
    pub input: PathBuf,

    /// Destination file. If omitted the report is printed to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format [default: the configured format, normally markup]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the report command
///
/// The whole document is rendered before anything is written, so a failure
/// never leaves a partial report behind.
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> ReportResult<()> {
    let format = match args.format {
        Some(format) => format,
        None => settings.default_format()?,
    };

    let options = RenderOptions::from_settings(settings, Local::now().date_naive())
        .with_pretty(args.pretty || settings.pretty_json);

    let report = generate_report(&args.input, format, &options)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &report).map_err(|e| {
                ReportError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;
            info!(path = %path.display(), %format, bytes = report.len(), "report written");
            println!("Report written to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            if !report.ends_with('\n') {
                writeln!(stdout)?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}
