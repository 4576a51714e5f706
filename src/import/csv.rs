//! CSV tabular decoder
//!
//! The first row names the fields; headers are matched to field names
//! exactly. Every value is textual. A row shorter than the header simply
//! lacks the trailing fields.

use ::csv::ReaderBuilder;
use tracing::trace;

use crate::error::ReportResult;
use crate::models::{FieldValue, RawRecord};

/// Decode CSV text into raw records
pub fn read_records(input: &str) -> ReportResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row = result?;
        let mut record = RawRecord::new(idx + 1);
        for (name, value) in headers.iter().zip(row.iter()) {
            record.insert(name, FieldValue::Text(value.to_string()));
        }
        trace!(record = idx + 1, "decoded CSV row");
        records.push(record);
    }

    Ok(records)
}
