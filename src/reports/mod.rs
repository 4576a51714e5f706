//! Reports module for finreport
//!
//! Aggregates loaded transactions into a [`Summary`] and derives the headline
//! metrics used by the styled document. [`generate_report`] runs the whole
//! load, aggregate and render pipeline for one input file.

pub mod kpis;
pub mod summary;

pub use kpis::{CategoryKind, DocumentKpis};
pub use summary::Summary;

use std::path::Path;

use crate::error::ReportResult;
use crate::export::{self, OutputFormat, RenderOptions};
use crate::import;

/// Load `path`, summarize it and render the result as a complete document
///
/// Nothing is returned unless every stage succeeds.
pub fn generate_report(
    path: &Path,
    format: OutputFormat,
    options: &RenderOptions,
) -> ReportResult<String> {
    let transactions = import::load_transactions(path)?;
    let summary = Summary::generate(transactions)?;
    export::render(&summary, format, options)
}
