//! Transaction Summary
//!
//! Reduces a sequence of transactions into overall, per-category and per-day
//! totals. The category and day maps are kept sorted so renderers can iterate
//! them directly.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{Money, Transaction};

/// Totals derived from one batch of transactions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Transactions in their original input order
    transactions: Vec<Transaction>,
    /// Exact sum of every amount
    total_amount: Money,
    /// Summed amounts keyed by category, in lexicographic order
    totals_by_category: BTreeMap<String, Money>,
    /// Summed amounts keyed by day, in chronological order
    totals_by_day: BTreeMap<NaiveDate, Money>,
}

impl Summary {
    /// Aggregate transactions into a summary
    ///
    /// An empty input is not an error: it yields a zero total and empty maps.
    /// A total that leaves the exact-decimal range is an `Overflow` error.
    pub fn generate(transactions: impl IntoIterator<Item = Transaction>) -> ReportResult<Self> {
        let transactions: Vec<Transaction> = transactions.into_iter().collect();

        let mut total_amount = Money::zero();
        let mut totals_by_category: BTreeMap<String, Money> = BTreeMap::new();
        let mut totals_by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();

        for txn in &transactions {
            total_amount = accumulate(total_amount, txn, || "the overall total".to_string())?;

            let category_total = totals_by_category
                .entry(txn.category().to_string())
                .or_default();
            *category_total = accumulate(*category_total, txn, || {
                format!("the total for category '{}'", txn.category())
            })?;

            let day_total = totals_by_day.entry(txn.occurred_on()).or_default();
            *day_total = accumulate(*day_total, txn, || {
                format!("the total for {}", txn.occurred_on())
            })?;
        }

        debug!(
            transactions = transactions.len(),
            categories = totals_by_category.len(),
            days = totals_by_day.len(),
            %total_amount,
            "summarized transactions"
        );

        Ok(Self {
            transactions,
            total_amount,
            totals_by_category,
            totals_by_day,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn totals_by_category(&self) -> &BTreeMap<String, Money> {
        &self.totals_by_category
    }

    pub fn totals_by_day(&self) -> &BTreeMap<NaiveDate, Money> {
        &self.totals_by_day
    }

    /// Check if no transactions were supplied
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Earliest and latest transaction dates, if there are any transactions
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.totals_by_day.keys().next()?;
        let last = self.totals_by_day.keys().next_back()?;
        Some((*first, *last))
    }
}

fn accumulate(
    running: Money,
    txn: &Transaction,
    describe: impl FnOnce() -> String,
) -> ReportResult<Money> {
    running.checked_add(txn.amount()).ok_or_else(|| {
        ReportError::Overflow(format!(
            "adding {} to {} exceeds the supported range",
            txn.amount().value(),
            describe()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(day: NaiveDate, category: &str, description: &str, amount: &str) -> Transaction {
        Transaction::new(day, category, description, Money::parse(amount).unwrap())
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(date(2024, 1, 1), "Sales", "Invoice #1001", "1200.00"),
            txn(date(2024, 1, 2), "Subscriptions", "Monthly recurring", "800.00"),
            txn(date(2024, 1, 3), "Rent", "Office lease", "-600.00"),
        ]
    }

    #[test]
    fn test_generate_sample() {
        let summary = Summary::generate(sample()).unwrap();

        assert_eq!(summary.total_amount(), Money::parse("1400.00").unwrap());
        assert_eq!(summary.transactions().len(), 3);
        assert_eq!(summary.totals_by_category().len(), 3);
        assert_eq!(summary.totals_by_day().len(), 3);
        assert_eq!(
            summary.totals_by_category()["Rent"],
            Money::parse("-600").unwrap()
        );
    }

    #[test]
    fn test_empty_input() {
        let summary = Summary::generate(Vec::new()).unwrap();

        assert!(summary.is_empty());
        assert!(summary.total_amount().is_zero());
        assert!(summary.totals_by_category().is_empty());
        assert!(summary.totals_by_day().is_empty());
        assert_eq!(summary.period(), None);
    }

    #[test]
    fn test_totals_agree() {
        let mut transactions = sample();
        transactions.push(txn(date(2024, 1, 1), "Sales", "Invoice #1002", "0.10"));
        transactions.push(txn(date(2024, 1, 3), "Rent", "Deposit", "-0.20"));
        transactions.push(txn(date(2024, 1, 2), "Fees", "", "0.70"));
        let expected: Money = transactions.iter().map(|t| t.amount()).sum();

        let summary = Summary::generate(transactions).unwrap();

        let by_category: Money = summary.totals_by_category().values().sum();
        let by_day: Money = summary.totals_by_day().values().sum();
        assert_eq!(summary.total_amount(), expected);
        assert_eq!(by_category, expected);
        assert_eq!(by_day, expected);
    }

    #[test]
    fn test_many_small_amounts_do_not_drift() {
        let transactions: Vec<_> = (0..1000)
            .map(|_| txn(date(2024, 3, 1), "Fees", "", "0.01"))
            .collect();
        let summary = Summary::generate(transactions).unwrap();
        assert_eq!(summary.total_amount(), Money::parse("10").unwrap());
    }

    #[test]
    fn test_maps_are_sorted_regardless_of_input_order() {
        let transactions = vec![
            txn(date(2024, 5, 9), "Zebra", "", "1"),
            txn(date(2023, 12, 31), "apple", "", "1"),
            txn(date(2024, 1, 15), "Mango", "", "1"),
        ];
        let summary = Summary::generate(transactions).unwrap();

        let categories: Vec<_> = summary.totals_by_category().keys().cloned().collect();
        assert_eq!(categories, vec!["Mango", "Zebra", "apple"]);

        let days: Vec<_> = summary.totals_by_day().keys().copied().collect();
        assert_eq!(days, vec![date(2023, 12, 31), date(2024, 1, 15), date(2024, 5, 9)]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let transactions = vec![
            txn(date(2024, 1, 3), "B", "third day first", "1"),
            txn(date(2024, 1, 1), "A", "first day second", "2"),
        ];
        let summary = Summary::generate(transactions).unwrap();
        assert_eq!(summary.transactions()[0].description(), "third day first");
        assert_eq!(summary.transactions()[1].description(), "first day second");
    }

    #[test]
    fn test_period_spans_earliest_to_latest() {
        let summary = Summary::generate(sample()).unwrap();
        assert_eq!(summary.period(), Some((date(2024, 1, 1), date(2024, 1, 3))));
    }

    #[test]
    fn test_total_beyond_decimal_range_is_an_error() {
        let max = "79228162514264337593543950335";
        let transactions = vec![
            txn(date(2024, 1, 1), "Sales", "big", max),
            txn(date(2024, 1, 2), "Sales", "bigger", max),
        ];

        let err = Summary::generate(transactions).unwrap_err();

        assert!(matches!(err, ReportError::Overflow(_)));
        assert!(err.to_string().contains("overall total"));
    }

    #[test]
    fn test_category_netting_to_zero_is_kept() {
        let transactions = vec![
            txn(date(2024, 1, 1), "Transfers", "out", "-50.00"),
            txn(date(2024, 1, 2), "Transfers", "in", "50.00"),
        ];
        let summary = Summary::generate(transactions).unwrap();
        assert!(summary.totals_by_category()["Transfers"].is_zero());
    }
}
