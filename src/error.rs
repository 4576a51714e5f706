//! Custom error types for finreport
//!
//! Every failure in the load → aggregate → render pipeline is fatal to the
//! current run, so the whole crate shares a single error enum built with
//! thiserror.

use std::path::Path;

use thiserror::Error;

/// The main error type for finreport operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input path does not exist
    #[error("No such input file: {0}")]
    NotFound(String),

    /// The input file extension is not one of the supported encodings
    #[error("Unsupported file type: '{extension}'. Supported: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    /// The top-level shape of a structured input is wrong
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// A required field is absent from a record
    #[error("Record {record}: missing '{field}' field")]
    MissingField { field: &'static str, record: usize },

    /// A required field is present but cannot be converted
    #[error("Record {record}: malformed '{field}' value {value:?}: {reason}")]
    MalformedField {
        field: &'static str,
        record: usize,
        value: String,
        reason: String,
    },

    /// The caller asked for an output format outside the supported set
    #[error("Unknown output format '{0}'. Supported: data, markup, document")]
    UnknownOutputFormat(String),

    /// A total grew beyond the range of an exact decimal
    #[error("Amount out of range: {0}")]
    Overflow(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON syntax errors in input or configuration
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Errors while producing or writing a rendered report
    #[error("Export error: {0}")]
    Export(String),
}

impl ReportError {
    /// Create a "not found" error for an input path
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound(path.display().to_string())
    }

    /// Create a "missing field" error for the given 1-based record number
    pub fn missing_field(field: &'static str, record: usize) -> Self {
        Self::MissingField { field, record }
    }

    /// Create a "malformed field" error
    pub fn malformed_field(
        field: &'static str,
        record: usize,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field,
            record,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a "missing field" error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Check if this is a "malformed field" error
    pub fn is_malformed_field(&self) -> bool {
        matches!(self, Self::MalformedField { .. })
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for finreport operations
pub type ReportResult<T> = Result<T, ReportError>;
