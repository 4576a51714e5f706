//! Report rendering for finreport
//!
//! Every renderer is a pure function of a [`Summary`] and [`RenderOptions`]:
//! - `data`: structured JSON with exact decimal strings
//! - `markup`: Markdown with overview and pipe tables
//! - `document`: standalone HTML with embedded styles and KPI cards

pub mod html;
pub mod json;
pub mod markdown;

pub use html::render_document;
pub use json::{render_data, DataReport, TransactionRecord};
pub use markdown::render_markdown;

use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use tracing::debug;

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::reports::Summary;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Structured JSON data
    #[value(alias = "json")]
    Data,
    /// Markdown text
    #[default]
    #[value(aliases = ["markdown", "md"])]
    Markup,
    /// Standalone HTML document with embedded styles
    #[value(alias = "html")]
    Document,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "data"),
            Self::Markup => write!(f, "markup"),
            Self::Document => write!(f, "document"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "data" | "json" => Ok(Self::Data),
            "markup" | "markdown" | "md" => Ok(Self::Markup),
            "document" | "html" => Ok(Self::Document),
            _ => Err(ReportError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Presentation settings shared by all renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indent structured data output
    pub pretty: bool,
    /// Symbol placed before every displayed amount
    pub currency_symbol: String,
    /// strftime pattern for dates in the styled document
    pub date_format: String,
    /// Heading of the styled document
    pub title: String,
    /// Date shown as the generation date in the styled document
    pub generated_on: NaiveDate,
}

impl RenderOptions {
    /// Default presentation for a report generated on the given date
    pub fn new(generated_on: NaiveDate) -> Self {
        Self::from_settings(&Settings::default(), generated_on)
    }

    /// Presentation taken from user settings
    pub fn from_settings(settings: &Settings, generated_on: NaiveDate) -> Self {
        Self {
            pretty: settings.pretty_json,
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.display_date_format.clone(),
            title: settings.report_title.clone(),
            generated_on,
        }
    }

    /// Set whether structured data is indented
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Format a date for display in the styled document
    pub fn display_date(&self, date: NaiveDate) -> ReportResult<String> {
        format_date(date, &self.date_format)
    }
}

/// Format a date with a strftime pattern
///
/// Fails with a `Config` error when the pattern is malformed or asks for
/// fields a calendar date does not have, such as `%H`.
pub fn format_date(date: NaiveDate, pattern: &str) -> ReportResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| {
        ReportError::Config(format!(
            "date format {:?} cannot be used to display a calendar date",
            pattern
        ))
    })?;
    Ok(out)
}

/// Render a summary in the requested format
pub fn render(
    summary: &Summary,
    format: OutputFormat,
    options: &RenderOptions,
) -> ReportResult<String> {
    let rendered = match format {
        OutputFormat::Data => render_data(summary, options.pretty)?,
        OutputFormat::Markup => render_markdown(summary, options),
        OutputFormat::Document => render_document(summary, options)?,
    };

    debug!(%format, bytes = rendered.len(), "rendered report");
    Ok(rendered)
}

/// Render a summary for a format given by name, e.g. from a config file
pub fn render_named(
    summary: &Summary,
    format: &str,
    options: &RenderOptions,
) -> ReportResult<String> {
    render(summary, format.parse()?, options)
}
