//! finreport - financial transaction report generator
//!
//! Reads a list of transactions from a JSON or CSV file, aggregates them into
//! overall, per-category and per-day totals, and renders the result as
//! structured data, Markdown, or a standalone styled HTML document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Exact-decimal money and the transaction model
//! - `import`: JSON and CSV loaders
//! - `reports`: Aggregation into a summary and derived KPIs
//! - `export`: The data, markup and document renderers
//! - `config`: Configuration and path management
//! - `cli`: Command handler used by the binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Local;
//! use finreport::export::{OutputFormat, RenderOptions};
//! use finreport::reports::generate_report;
//!
//! let options = RenderOptions::new(Local::now().date_naive());
//! let markdown = generate_report(Path::new("ledger.csv"), OutputFormat::Markup, &options)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;

pub use error::{ReportError, ReportResult};
