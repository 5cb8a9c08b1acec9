//! Paginated plain-text report of a projection
//!
//! Layout follows the downloadable results document: a header on the first
//! page, then the parameter table, the summary table and the year-by-year
//! breakdown (opening year omitted). Every page carries the disclaimer and
//! a page counter.
//!
//! Amounts are printed with at most two fraction digits (`₹35,66,632.88`),
//! unlike the on-screen locale default that keeps three.

use super::format::format_amount;
use crate::error::Result;
use crate::projection::ProjectionResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text and pagination settings for exported reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLayout {
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,

    /// Second footer line, after the disclaimer
    #[serde(default = "default_imprint")]
    pub imprint: String,

    /// Body lines per page, excluding the footer
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
}

fn default_brand() -> String { "FinWise Growth Hub".to_string() }
fn default_title() -> String { "Compound Interest Calculator Results".to_string() }
fn default_disclaimer() -> String {
    "This is an estimation based on consistent returns. Actual investment performance may vary."
        .to_string()
}
fn default_imprint() -> String { "© FinWise Growth Hub | finwisehub.com".to_string() }
fn default_lines_per_page() -> usize { 50 }

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            title: default_title(),
            disclaimer: default_disclaimer(),
            imprint: default_imprint(),
            lines_per_page: default_lines_per_page(),
        }
    }
}

/// Rendered report, one entry per page with footers already applied
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pages: Vec<Vec<String>>,
}

impl ReportDocument {
    pub fn build(result: &ProjectionResult, layout: &ReportLayout, generated_on: NaiveDate) -> Self {
        let body = body_lines(result, layout, generated_on);
        let per_page = layout.lines_per_page.max(1);
        let chunks: Vec<&[String]> = body.chunks(per_page).collect();
        let page_count = chunks.len();

        let pages = chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let mut page = chunk.to_vec();
                page.push(String::new());
                page.push(layout.disclaimer.clone());
                page.push(layout.imprint.clone());
                page.push(format!("Page {} of {}", i + 1, page_count));
                page
            })
            .collect();

        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    /// Whole document as text, pages separated by form feeds
    pub fn render(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{000C}\n")
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.render())?;
        log::info!("Report written to {} ({} pages)", path.as_ref().display(), self.page_count());
        Ok(())
    }
}

fn rupees(amount: f64) -> String {
    format!("₹{}", format_amount(amount))
}

fn body_lines(result: &ProjectionResult, layout: &ReportLayout, generated_on: NaiveDate) -> Vec<String> {
    let params = &result.parameters;
    let summary = result.summary();
    let mut lines = vec![
        layout.brand.clone(),
        layout.title.clone(),
        format!("Generated on: {}", generated_on.format("%d/%m/%Y")),
        String::new(),
        "Your Investment Details".to_string(),
    ];

    let parameter_rows = vec![
        vec!["Initial Investment".to_string(), rupees(params.principal)],
        vec!["Annual Contribution".to_string(), rupees(params.annual_contribution)],
        vec!["Contribution Frequency".to_string(), params.contribution_frequency.to_string()],
        vec!["Interest Rate".to_string(), format!("{}%", params.interest_rate)],
        vec!["Compounding Frequency".to_string(), params.compounding_frequency.to_string()],
        vec!["Investment Period".to_string(), format!("{} Years", params.years)],
    ];
    lines.extend(render_table(Some(&["Parameter", "Value"]), &parameter_rows));

    lines.push(String::new());
    lines.push("Investment Summary".to_string());
    let summary_rows = vec![
        vec!["Total Amount Invested".to_string(), rupees(summary.total_deposited)],
        vec!["Interest Earned".to_string(), rupees(summary.total_interest)],
        vec!["Final Investment Value".to_string(), rupees(summary.final_value)],
    ];
    lines.extend(render_table(None, &summary_rows));

    lines.push(String::new());
    lines.push("Year-by-Year Breakdown".to_string());
    let yearly_rows: Vec<Vec<String>> = result
        .growth_years()
        .iter()
        .map(|s| {
            vec![
                s.year.to_string(),
                rupees(s.total_deposited),
                rupees(s.interest_earned),
                rupees(s.investment_value),
            ]
        })
        .collect();
    lines.extend(render_table(
        Some(&["Year", "Total Invested", "Interest Earned", "Investment Value"]),
        &yearly_rows,
    ));

    lines
}

/// Fixed-width table: first column left-aligned, the rest right-aligned
fn render_table(head: Option<&[&str]>, rows: &[Vec<String>]) -> Vec<String> {
    let columns = head
        .map(|h| h.len())
        .unwrap_or_else(|| rows.first().map(|r| r.len()).unwrap_or(0));
    let mut widths = vec![0usize; columns];
    let all_rows = head
        .map(|h| h.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        .into_iter()
        .chain(rows.iter().cloned());
    for row in all_rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .take(columns)
            .map(|(i, cell)| {
                if i == 0 {
                    format!("{:<width$}", cell, width = widths[i])
                } else {
                    format!("{:>width$}", cell, width = widths[i])
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    if let Some(h) = head {
        let head_cells: Vec<String> = h.iter().map(|s| s.to_string()).collect();
        lines.push(format_row(head_cells.as_slice()));
        lines.push(rule);
    }
    lines.extend(rows.iter().map(|r| format_row(r.as_slice())));
    lines
}
