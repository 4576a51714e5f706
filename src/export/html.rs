//! Styled document rendering
//!
//! The document is assembled as a tree of sections (hero, KPI grid, analysis
//! cards, one card per dataset) from precomputed values, then rendered in a
//! single `maud` pass. All user-supplied text is escaped by `maud`.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::RenderOptions;
use crate::error::ReportResult;
use crate::models::Money;
use crate::reports::{CategoryKind, DocumentKpis, Summary};

const STYLESHEET: &str = include_str!("report.css");

/// Render a summary as a standalone HTML document
///
/// Fails if a KPI overflows or the configured date format cannot display a
/// calendar date.
pub fn render_document(summary: &Summary, options: &RenderOptions) -> ReportResult<String> {
    Ok(DocumentPage::build(summary, options)?
        .into_html()
        .into_string())
}

struct DocumentPage {
    title: String,
    hero: Hero,
    kpis: Vec<MetricCard>,
    insights: Vec<MetricCard>,
    datasets: Vec<DatasetCard>,
}

impl DocumentPage {
    fn build(summary: &Summary, options: &RenderOptions) -> ReportResult<Self> {
        let kpis = DocumentKpis::from_summary(summary)?;
        let money = |value: Money| value.format_grouped(&options.currency_symbol);

        let period = match kpis.period {
            Some((start, end)) => Some((options.display_date(start)?, options.display_date(end)?)),
            None => None,
        };

        let hero = Hero {
            generated_on: options.display_date(options.generated_on)?,
            title: options.title.clone(),
            period,
            transaction_count: kpis.transaction_count,
            category_count: kpis.category_count,
        };

        let kpi_cards = vec![
            MetricCard::new(
                "Total Revenue",
                money(kpis.total_revenue),
                "Income across positive categories.",
            ),
            MetricCard::new(
                "Total Expenses",
                money(kpis.total_expenses),
                "Combined outflow from expense accounts.",
            ),
            MetricCard::new(
                "Gross Profit",
                money(kpis.gross_profit),
                "Revenue minus expense allocations.",
            ),
            MetricCard::new(
                "Net Income",
                money(kpis.net_income),
                "Overall movement for the reporting window.",
            ),
        ];

        let insights = vec![
            MetricCard::new(
                "Category Coverage",
                kpis.category_count.to_string(),
                "Total categories monitored across the report.",
            ),
            MetricCard::new(
                "Revenue vs Expense Mix",
                format!("{}:{}", kpis.revenue_category_count, kpis.expense_category_count),
                "Distribution of income and expense groupings.",
            ),
            MetricCard::new(
                "Neutral Categories",
                kpis.neutral_category_count.to_string(),
                "Accounts that net to zero within the period.",
            ),
            MetricCard::new(
                "Average Daily Movement",
                money(kpis.average_daily_total),
                "Total impact divided by the number of active days.",
            ),
            MetricCard::new(
                "Average Transaction",
                money(kpis.average_transaction),
                format!("Mean amount across {} transactions.", kpis.transaction_count),
            ),
        ];

        let categories = DatasetCard {
            title: "Category Performance",
            subtitle: "How each category contributed to the reporting period.",
            badge: "table",
            empty_notice: "No category totals available.",
            columns: vec![
                Column::text("Category"),
                Column::numeric("Total"),
                Column::text("Type"),
            ],
            rows: summary
                .totals_by_category()
                .iter()
                .map(|(category, total)| {
                    vec![
                        Cell::Text(category.clone()),
                        Cell::Amount(money(*total)),
                        Cell::Kind(CategoryKind::classify(*total)),
                    ]
                })
                .collect(),
        };

        let days = DatasetCard {
            title: "Daily Totals",
            subtitle: "Momentum of the business day by day.",
            badge: "trend",
            empty_notice: "No daily totals available.",
            columns: vec![Column::text("Date"), Column::numeric("Total")],
            rows: summary
                .totals_by_day()
                .iter()
                .map(|(day, total)| {
                    Ok(vec![
                        Cell::Text(options.display_date(*day)?),
                        Cell::Amount(money(*total)),
                    ])
                })
                .collect::<ReportResult<_>>()?,
        };

        let transactions = DatasetCard {
            title: "Transactions",
            subtitle: "Itemised view of the activity powering this report.",
            badge: "ledger",
            empty_notice: "No transactions supplied.",
            columns: vec![
                Column::text("Date"),
                Column::text("Category"),
                Column::text("Description"),
                Column::numeric("Amount"),
            ],
            rows: summary
                .transactions()
                .iter()
                .map(|txn| {
                    Ok(vec![
                        Cell::Text(options.display_date(txn.occurred_on())?),
                        Cell::Text(txn.category().to_string()),
                        Cell::Text(txn.description().to_string()),
                        Cell::Amount(money(txn.amount())),
                    ])
                })
                .collect::<ReportResult<_>>()?,
        };

        Ok(Self {
            title: options.title.clone(),
            hero,
            kpis: kpi_cards,
            insights,
            datasets: vec![categories, days, transactions],
        })
    }

    fn into_html(self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    style { (PreEscaped(STYLESHEET)) }
                }
                body {
                    div class="wrap" {
                        div class="shell" {
                            (self.hero.into_html())
                            section class="section kpi-section" aria-label="Key financial metrics" {
                                div class="kpi-grid" {
                                    @for card in self.kpis {
                                        (card.into_html("kpi-card"))
                                    }
                                }
                            }
                            section class="section" aria-labelledby="analysis-summary-heading" {
                                div class="analysis-card" {
                                    h2 id="analysis-summary-heading" { "Enhanced Analysis Summary" }
                                    p {
                                        "A quick scan of structural health, "
                                        "activity mix and pacing."
                                    }
                                }
                                div class="analysis-grid" {
                                    @for card in self.insights {
                                        (card.into_html("insight-card"))
                                    }
                                }
                            }
                            @for dataset in self.datasets {
                                (dataset.into_html())
                            }
                        }
                    }
                }
            }
        }
    }
}

struct Hero {
    generated_on: String,
    title: String,
    period: Option<(String, String)>,
    transaction_count: usize,
    category_count: usize,
}

impl Hero {
    fn into_html(self) -> Markup {
        html! {
            header class="hero" role="banner" {
                div {
                    p class="hero__meta" { "Generated " (self.generated_on) }
                    h1 class="hero__title" { (self.title) }
                    @match self.period {
                        Some((start, end)) => {
                            p class="hero__meta" { "Reporting period: " (start) " – " (end) }
                        },
                        None => {
                            p class="hero__meta" { "Reporting period unavailable." }
                        }
                    }
                    p class="hero__meta" {
                        (self.transaction_count) " transactions across "
                        (self.category_count) " categories."
                    }
                }
                div class="hero__footer" {
                    span class="hero__badge" { "Automated insights" }
                    span class="hero__badge" { "Ready for clients" }
                }
            }
        }
    }
}

/// A headline figure with a caption, shared by the KPI and analysis grids
struct MetricCard {
    label: &'static str,
    value: String,
    meta: String,
}

impl MetricCard {
    fn new(label: &'static str, value: String, meta: impl Into<String>) -> Self {
        Self {
            label,
            value,
            meta: meta.into(),
        }
    }

    /// `class` is the card's block class; value and caption use its modifiers
    fn into_html(self, class: &str) -> Markup {
        html! {
            article class=(class) {
                h3 { (self.label) }
                p class={ (class) "__value" } { (self.value) }
                p class={ (class) "__meta" } { (self.meta) }
            }
        }
    }
}

struct Column {
    label: &'static str,
    numeric: bool,
}

impl Column {
    fn text(label: &'static str) -> Self {
        Self { label, numeric: false }
    }

    fn numeric(label: &'static str) -> Self {
        Self { label, numeric: true }
    }
}

enum Cell {
    Text(String),
    Amount(String),
    Kind(CategoryKind),
}

impl Cell {
    fn into_html(self) -> Markup {
        match self {
            Self::Text(text) => html! { td { (text) } },
            Self::Amount(amount) => html! { td class="numeric" { (amount) } },
            Self::Kind(kind) => html! {
                td { span class={ "pill " (pill_class(kind)) } { (kind.to_string()) } }
            },
        }
    }
}

fn pill_class(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::Revenue => "pill--positive",
        CategoryKind::Expense => "pill--negative",
        CategoryKind::Neutral => "pill--neutral",
    }
}

/// One dataset rendered as a bordered card, or an empty-state notice
struct DatasetCard {
    title: &'static str,
    subtitle: &'static str,
    badge: &'static str,
    empty_notice: &'static str,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl DatasetCard {
    fn into_html(self) -> Markup {
        let has_rows = !self.rows.is_empty();

        html! {
            section class="section data-section" {
                div class="card card--bordered" {
                    div class="card__header" {
                        div {
                            h2 { (self.title) }
                            p { (self.subtitle) }
                        }
                        @if has_rows {
                            span class="chart-badge" aria-hidden="true" { (self.badge) }
                        }
                    }
                    div class="card__body" {
                        @if has_rows {
                            table class="data-table" {
                                thead {
                                    tr {
                                        @for column in &self.columns {
                                            th class=[column.numeric.then_some("numeric")] {
                                                (column.label)
                                            }
                                        }
                                    }
                                }
                                tbody {
                                    @for row in self.rows {
                                        tr {
                                            @for cell in row {
                                                (cell.into_html())
                                            }
                                        }
                                    }
                                }
                            }
                        } @else {
                            p class="empty-state" { (self.empty_notice) }
                        }
                    }
                }
            }
        }
    }
}
