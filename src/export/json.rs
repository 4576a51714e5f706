//! Structured data rendering
//!
//! Emits the summary as JSON. Amounts are exact decimal strings and dates are
//! ISO-8601 strings so a reload never goes through binary floating point.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::models::{Money, Transaction};
use crate::reports::Summary;

/// Serializable form of a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataReport {
    /// Transactions in original input order
    pub transactions: Vec<TransactionRecord>,

    pub total_amount: Money,

    /// Sorted by category name
    pub totals_by_category: BTreeMap<String, Money>,

    /// Sorted by date
    pub totals_by_day: BTreeMap<NaiveDate, Money>,
}

/// One transaction as it appears in the data report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.occurred_on(),
            category: txn.category().to_string(),
            description: txn.description().to_string(),
            amount: txn.amount(),
        }
    }
}

impl DataReport {
    /// Build the report from a summary
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            transactions: summary.transactions().iter().map(TransactionRecord::from).collect(),
            total_amount: summary.total_amount(),
            totals_by_category: summary.totals_by_category().clone(),
            totals_by_day: summary.totals_by_day().clone(),
        }
    }

    /// Serialize to a JSON string, indented when `pretty` is set
    pub fn to_json(&self, pretty: bool) -> ReportResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Parse a previously rendered data report
    pub fn from_json(json: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Render a summary as structured JSON data
pub fn render_data(summary: &Summary, pretty: bool) -> ReportResult<String> {
    DataReport::from_summary(summary).to_json(pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    fn sample() -> Summary {
        Summary::generate(vec![
            Transaction::new(date(3), "Rent", "Office lease", money("-600.00")),
            Transaction::new(date(1), "Sales", "Invoice #1001", money("1200.00")),
            Transaction::new(date(2), "Subscriptions", "Monthly recurring", money("800.00")),
            Transaction::new(date(2), "Fees", "Card fee", money("-0.125")),
        ])
        .unwrap()
    }

    #[test]
    fn test_amounts_are_strings() {
        let json = render_data(&sample(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_amount"], "1399.875");
        assert_eq!(value["totals_by_category"]["Rent"], "-600.00");
        assert_eq!(value["totals_by_day"]["2024-01-02"], "799.875");
        assert_eq!(value["transactions"][0]["date"], "2024-01-03");
        assert_eq!(value["transactions"][0]["amount"], "-600.00");
        assert_eq!(value["transactions"][0]["description"], "Office lease");
    }

    #[test]
    fn test_keys_are_sorted() {
        let json = render_data(&sample(), false).unwrap();

        let fees = json.find("\"Fees\":").unwrap();
        let rent = json.find("\"Rent\":").unwrap();
        let sales = json.find("\"Sales\":").unwrap();
        assert!(fees < rent && rent < sales);

        let first = json.find("\"2024-01-01\":").unwrap();
        let third = json.find("\"2024-01-03\":").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_round_trip_preserves_totals() {
        let summary = sample();
        let json = render_data(&summary, true).unwrap();

        let parsed = DataReport::from_json(&json).unwrap();

        assert_eq!(parsed, DataReport::from_summary(&summary));
        assert_eq!(parsed.total_amount, summary.total_amount());
        assert_eq!(&parsed.totals_by_category, summary.totals_by_category());
        assert_eq!(&parsed.totals_by_day, summary.totals_by_day());
    }

    #[test]
    fn test_pretty_only_changes_whitespace() {
        let summary = sample();
        let compact = render_data(&summary, false).unwrap();
        let pretty = render_data(&summary, true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  \"transactions\""));

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_summary() {
        let json = render_data(&Summary::generate(Vec::new()).unwrap(), false).unwrap();
        assert_eq!(
            json,
            r#"{"transactions":[],"total_amount":"0","totals_by_category":{},"totals_by_day":{}}"#
        );
    }
}
