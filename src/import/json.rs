//! JSON list-of-records decoder
//!
//! The whole document must be a single top-level list; each element is an
//! object whose keys name the transaction fields.

use serde_json::Value;
use tracing::trace;

use crate::error::{ReportError, ReportResult};
use crate::models::RawRecord;

/// Decode a JSON document into raw records
pub fn read_records(input: &str) -> ReportResult<Vec<RawRecord>> {
    let payload: Value = serde_json::from_str(input)?;

    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(ReportError::InvalidStructure(format!(
                "JSON input must be a list of records, found {}",
                describe(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| to_record(idx + 1, item))
        .collect()
}

fn to_record(position: usize, item: Value) -> ReportResult<RawRecord> {
    let fields = match item {
        Value::Object(fields) => fields,
        other => {
            return Err(ReportError::InvalidStructure(format!(
                "record {} must be an object, found {}",
                position,
                describe(&other)
            )))
        }
    };

    let mut record = RawRecord::new(position);
    for (name, value) in fields {
        record.insert(name, value);
    }
    trace!(record = position, "decoded JSON record");
    Ok(record)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
