//! User settings for finreport
//!
//! Presentation preferences read from an optional JSON file. Every field has a
//! default, so a partial file or no file at all is fine.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::ReportPaths;
use crate::error::{ReportError, ReportResult};
use crate::export::{format_date, OutputFormat};

/// User settings for finreport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol placed before every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for the styled document (strftime format)
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,

    /// Output format used when none is given on the command line
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Whether structured data output is indented by default
    #[serde(default)]
    pub pretty_json: bool,

    /// Heading of the styled document
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_display_date_format() -> String {
    "%b %d, %Y".to_string()
}

fn default_format() -> String {
    "markup".to_string()
}

fn default_report_title() -> String {
    "Financial Performance Report".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            display_date_format: default_display_date_format(),
            default_format: default_format(),
            pretty_json: false,
            report_title: default_report_title(),
        }
    }
}

impl Settings {
    /// Load settings from the standard location, or defaults if there is no file
    pub fn load(paths: &ReportPaths) -> ReportResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from an explicit file, which must exist
    pub fn load_from(path: &Path) -> ReportResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!("Failed to read settings file {}: {}", path.display(), e))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ReportError::Config(format!("Failed to parse settings file {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loaded settings");
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would fail or mislead at render time
    pub fn validate(&self) -> ReportResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ReportError::Config("currency_symbol must not be empty".into()));
        }

        if StrftimeItems::new(&self.display_date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ReportError::Config(format!(
                "display_date_format {:?} is not a valid strftime pattern",
                self.display_date_format
            )));
        }

        // Patterns naming only time fields parse fine but cannot render a date
        format_date(NaiveDate::default(), &self.display_date_format)?;

        self.default_format()?;
        Ok(())
    }

    /// The configured default output format
    pub fn default_format(&self) -> ReportResult<OutputFormat> {
        self.default_format.parse()
    }
}
