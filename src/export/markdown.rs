//! Markdown rendering
//!
//! Produces a heading, an overview line and three pipe tables. Amounts are
//! rounded half-up to cents and right-aligned.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::RenderOptions;
use crate::reports::Summary;

const HEADING: &str = "# Financial Summary";
const NO_TRANSACTIONS: &str = "No transactions supplied.";

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render a summary as a Markdown document
///
/// An empty summary yields only the heading and a notice, with no tables.
pub fn render_markdown(summary: &Summary, options: &RenderOptions) -> String {
    let symbol = options.currency_symbol.as_str();

    if summary.is_empty() {
        return format!("{}\n\n{}\n", HEADING, NO_TRANSACTIONS);
    }

    let categories = summary.totals_by_category().iter().map(|(category, total)| CategoryRow {
        category: escape_cell(category),
        total: total.format_with_symbol(symbol),
    });

    let days = summary.totals_by_day().iter().map(|(day, total)| DayRow {
        date: day.format("%Y-%m-%d").to_string(),
        total: total.format_with_symbol(symbol),
    });

    let transactions = summary.transactions().iter().map(|txn| TransactionRow {
        date: txn.occurred_on().format("%Y-%m-%d").to_string(),
        category: escape_cell(txn.category()),
        description: escape_cell(txn.description()),
        amount: txn.amount().format_with_symbol(symbol),
    });

    let mut out = String::new();
    out.push_str(HEADING);
    out.push_str("\n\n## Overview\n\n");
    out.push_str(&format!(
        "Total amount: **{}**\n\n",
        summary.total_amount().format_with_symbol(symbol)
    ));
    out.push_str("## Totals by category\n\n");
    out.push_str(&pipe_table(categories));
    out.push_str("\n\n## Totals by day\n\n");
    out.push_str(&pipe_table(days));
    out.push_str("\n\n## Transactions\n\n");
    out.push_str(&pipe_table(transactions));
    out.push('\n');
    out
}

/// Build a Markdown table whose last column holds right-aligned amounts
fn pipe_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::markdown())
        .modify(Columns::last(), Alignment::right());

    // The markdown style pads cells but leaves the separator row unaligned
    let rendered = table.to_string();
    let mut lines: Vec<String> = rendered.lines().map(str::to_string).collect();
    if let Some(separator) = lines.get_mut(1) {
        if let Some(dashes) = separator.strip_suffix("-|") {
            *separator = format!("{dashes}:|");
        }
    }
    lines.join("\n")
}

/// Keep free text from breaking the table layout
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
