//! Transaction import
//!
//! Turns an input file into an ordered list of [`Transaction`]s. Two
//! encodings are supported, picked by file extension:
//! - JSON: one top-level list of records
//! - CSV: a header row naming the fields, then one record per line
//!
//! Loading is a 1:1 structural transform. Records are never sorted, filtered
//! or deduplicated, and the first bad record aborts the whole load.

pub mod csv;
pub mod json;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{RawRecord, Transaction};

/// Input encodings understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    /// Extensions accepted by [`SourceFormat::from_path`], sorted
    pub const SUPPORTED_EXTENSIONS: [&'static str; 2] = [".csv", ".json"];

    /// Pick the encoding from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> ReportResult<Self> {
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        match extension.as_str() {
            ".json" => Ok(Self::Json),
            ".csv" => Ok(Self::Csv),
            _ => Err(ReportError::UnsupportedFormat {
                extension,
                supported: Self::SUPPORTED_EXTENSIONS.join(", "),
            }),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Csv => write!(f, "CSV"),
        }
    }
}

/// Load every transaction from `path`
pub fn load_transactions(path: &Path) -> ReportResult<Vec<Transaction>> {
    if !path.exists() {
        return Err(ReportError::not_found(path));
    }

    let format = SourceFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ReportError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let records = match format {
        SourceFormat::Json => json::read_records(&contents)?,
        SourceFormat::Csv => csv::read_records(&contents)?,
    };
    let transactions = to_transactions(records)?;

    debug!(
        path = %path.display(),
        %format,
        count = transactions.len(),
        "loaded transactions"
    );

    Ok(transactions)
}

/// Coerce records in order, stopping at the first failure
pub fn to_transactions(
    records: impl IntoIterator<Item = RawRecord>,
) -> ReportResult<Vec<Transaction>> {
    records
        .into_iter()
        .map(|record| Transaction::from_record(&record))
        .collect()
}
