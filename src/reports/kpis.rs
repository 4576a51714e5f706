//! Headline metrics for the styled document
//!
//! These values are derived from a [`Summary`] on demand and never stored on
//! it. The HTML renderer only decides how they look.

use std::fmt;

use chrono::NaiveDate;

use super::summary::Summary;
use crate::error::{ReportError, ReportResult};
use crate::models::Money;

/// How a category contributed over the period, by the sign of its total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Total strictly above zero
    Revenue,
    /// Total strictly below zero
    Expense,
    /// Total exactly zero
    Neutral,
}

impl CategoryKind {
    pub fn classify(total: Money) -> Self {
        if total.is_positive() {
            Self::Revenue
        } else if total.is_negative() {
            Self::Expense
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revenue => write!(f, "Revenue"),
            Self::Expense => write!(f, "Expense"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Key figures shown in the document's hero, KPI grid and analysis cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentKpis {
    /// Sum of category totals above zero
    pub total_revenue: Money,
    /// Magnitude of the sum of category totals below zero
    pub total_expenses: Money,
    /// Revenue minus expenses
    pub gross_profit: Money,
    /// The summary's overall total
    pub net_income: Money,
    pub category_count: usize,
    pub revenue_category_count: usize,
    pub expense_category_count: usize,
    pub neutral_category_count: usize,
    pub transaction_count: usize,
    pub day_count: usize,
    /// Total divided by the number of distinct days, zero when there are none
    pub average_daily_total: Money,
    /// Total divided by the number of transactions, zero when there are none
    pub average_transaction: Money,
    /// Earliest and latest transaction dates
    pub period: Option<(NaiveDate, NaiveDate)>,
}

impl DocumentKpis {
    /// Derive the metrics for a summary
    ///
    /// Fails with `Overflow` if revenue, expenses or their difference leaves
    /// the exact-decimal range.
    pub fn from_summary(summary: &Summary) -> ReportResult<Self> {
        let totals = summary.totals_by_category();

        let mut total_revenue = Money::zero();
        let mut expenses_signed = Money::zero();
        let mut revenue_category_count = 0;
        let mut expense_category_count = 0;

        for total in totals.values() {
            match CategoryKind::classify(*total) {
                CategoryKind::Revenue => {
                    total_revenue = total_revenue
                        .checked_add(*total)
                        .ok_or_else(|| out_of_range("total revenue"))?;
                    revenue_category_count += 1;
                }
                CategoryKind::Expense => {
                    expenses_signed = expenses_signed
                        .checked_add(*total)
                        .ok_or_else(|| out_of_range("total expenses"))?;
                    expense_category_count += 1;
                }
                CategoryKind::Neutral => {}
            }
        }

        let total_expenses = -expenses_signed;
        let gross_profit = total_revenue
            .checked_sub(total_expenses)
            .ok_or_else(|| out_of_range("gross profit"))?;
        let category_count = totals.len();
        let transaction_count = summary.transactions().len();
        let day_count = summary.totals_by_day().len();
        let net_income = summary.total_amount();

        Ok(Self {
            total_revenue,
            total_expenses,
            gross_profit,
            net_income,
            category_count,
            revenue_category_count,
            expense_category_count,
            neutral_category_count: category_count
                - revenue_category_count
                - expense_category_count,
            transaction_count,
            day_count,
            average_daily_total: net_income.divided_by(day_count),
            average_transaction: net_income.divided_by(transaction_count),
            period: summary.period(),
        })
    }
}

fn out_of_range(metric: &str) -> ReportError {
    ReportError::Overflow(format!("{} exceeds the supported range", metric))
}
