//! Presentation and export of projection results

pub mod format;
mod document;
pub mod csv_export;

pub use document::{ReportDocument, ReportLayout};
pub use format::{format_currency, format_amount, format_percentage, format_indian_large_number};
