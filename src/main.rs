use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use finreport::cli::{handle_report_command, ReportArgs};
use finreport::config::{ReportPaths, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "finreport",
    version,
    about = "Generate financial reports",
    long_about = "finreport reads transactions from a JSON or CSV file, totals them \
                  overall, by category and by day, and renders the result as JSON \
                  data, a Markdown summary, or a standalone HTML report."
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// Settings file to use instead of the default location
    #[arg(long, env = "FINREPORT_CONFIG")]
    config: Option<PathBuf>,

    /// The logging verbosity. One of error, warn, info, debug, trace.
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    trace!("{cli:?}");

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(&ReportPaths::new()?)?,
    };

    handle_report_command(&settings, cli.report)?;
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout carries only the report.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
