//! Core data models for finreport
//!
//! This module contains the value types shared by every stage of the
//! pipeline: exact money amounts and transactions, plus the loosely typed
//! records that loaders produce before coercion.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{
    normalize_category, parse_iso_date, FieldValue, RawRecord, Transaction, AMOUNT_FIELD,
    CATEGORY_FIELD, DATE_FIELD, DESCRIPTION_FIELD, UNCATEGORISED,
};
