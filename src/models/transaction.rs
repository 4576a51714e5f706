//! Transaction model
//!
//! A `Transaction` is one dated financial event. Loaders never build one
//! directly; they hand a `RawRecord` of loosely typed fields to
//! [`Transaction::from_record`], which owns every coercion rule.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::trace;

use super::money::Money;
use crate::error::{ReportError, ReportResult};

/// Category used when a record has no usable category
pub const UNCATEGORISED: &str = "Uncategorised";

pub const DATE_FIELD: &str = "date";
pub const CATEGORY_FIELD: &str = "category";
pub const DESCRIPTION_FIELD: &str = "description";
pub const AMOUNT_FIELD: &str = "amount";

/// A single field value as it arrived from a source
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// An already-typed calendar date
    Date(NaiveDate),
    /// An already-typed exact decimal
    Decimal(Decimal),
    /// A number as written in the source document (kept textual, never `f64`)
    Number(serde_json::Number),
    Text(String),
    Bool(bool),
    Null,
    /// Lists, maps and anything else, kept as their JSON text
    Other(String),
}

impl FieldValue {
    /// Text form used for free-text fields and error messages
    fn to_text(&self) -> String {
        match self {
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Decimal(value) => value.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Null => String::new(),
            Self::Other(raw) => raw.clone(),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

/// One source record: named fields plus its 1-based position in the input
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    position: usize,
    fields: HashMap<String, FieldValue>,
}

impl RawRecord {
    /// Create an empty record at the given 1-based position
    pub fn new(position: usize) -> Self {
        Self {
            position,
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Look up a field; an explicit null counts as absent
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .get(name)
            .filter(|value| !matches!(value, FieldValue::Null))
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    occurred_on: NaiveDate,
    category: String,
    description: String,
    amount: Money,
}

impl Transaction {
    /// Create a new transaction; a blank category becomes [`UNCATEGORISED`]
    pub fn new(
        occurred_on: NaiveDate,
        category: &str,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            occurred_on,
            category: normalize_category(category),
            description: description.into(),
            amount,
        }
    }

    /// Coerce a raw record into a transaction
    ///
    /// Fields are checked in order: date, category, description, amount.
    /// `date` and `amount` are required; category falls back to
    /// [`UNCATEGORISED`] and description to an empty string.
    pub fn from_record(record: &RawRecord) -> ReportResult<Self> {
        let occurred_on = coerce_date(record)?;
        let category = record
            .get(CATEGORY_FIELD)
            .map(FieldValue::to_text)
            .unwrap_or_default();
        let description = record
            .get(DESCRIPTION_FIELD)
            .map(FieldValue::to_text)
            .unwrap_or_default();
        let amount = coerce_amount(record)?;

        trace!(record = record.position(), %occurred_on, %amount, "coerced record");

        Ok(Self::new(occurred_on, &category, description, amount))
    }

    pub fn occurred_on(&self) -> NaiveDate {
        self.occurred_on
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

/// Trim a category label, substituting the default when nothing is left
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNCATEGORISED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, &'static str> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !shaped {
        return Err("expected a YYYY-MM-DD date");
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| "not a valid calendar date")
}

fn coerce_date(record: &RawRecord) -> ReportResult<NaiveDate> {
    let position = record.position();
    match record.get(DATE_FIELD) {
        None => Err(ReportError::missing_field(DATE_FIELD, position)),
        Some(FieldValue::Date(date)) => Ok(*date),
        Some(FieldValue::Text(raw)) => parse_iso_date(raw.trim()).map_err(|reason| {
            ReportError::malformed_field(DATE_FIELD, position, raw.as_str(), reason)
        }),
        Some(other) => Err(ReportError::malformed_field(
            DATE_FIELD,
            position,
            other.to_text(),
            "expected a YYYY-MM-DD date string",
        )),
    }
}

fn coerce_amount(record: &RawRecord) -> ReportResult<Money> {
    let position = record.position();
    let raw = match record.get(AMOUNT_FIELD) {
        None => return Err(ReportError::missing_field(AMOUNT_FIELD, position)),
        Some(FieldValue::Decimal(value)) => return Ok(Money::new(*value)),
        Some(FieldValue::Number(n)) => n.to_string(),
        Some(FieldValue::Text(s)) => s.clone(),
        Some(other) => {
            return Err(ReportError::malformed_field(
                AMOUNT_FIELD,
                position,
                other.to_text(),
                "expected a number or numeric string",
            ))
        }
    };

    Money::parse(&raw).map_err(|e| {
        ReportError::malformed_field(AMOUNT_FIELD, position, raw.as_str(), e.to_string())
    })
}
