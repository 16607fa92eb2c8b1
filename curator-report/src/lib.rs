//! Spreadsheet rendering for the curation reports.
//!
//! Two workbooks are produced here: the four-sheet release report and
//! the single-sheet file categorization summary. All sheets auto-size
//! their columns to the longest stringified value plus a small margin
//! and freeze the header row.

pub mod report;
pub mod summary;

use rust_xlsxwriter::{Worksheet, XlsxError};
use thiserror::Error;

pub use report::{ReportData, write_report};
pub use summary::{SummaryRow, write_summary};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tracks the longest stringified value per column for auto-sizing.
pub(crate) struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    pub(crate) fn new(columns: usize) -> Self {
        Self {
            widths: vec![0; columns],
        }
    }

    pub(crate) fn note(&mut self, col: usize, value: &str) {
        if value.len() > self.widths[col] {
            self.widths[col] = value.len();
        }
    }

    pub(crate) fn apply(&self, sheet: &mut Worksheet) -> Result<(), XlsxError> {
        for (col, width) in self.widths.iter().enumerate() {
            sheet.set_column_width(col as u16, (*width + 2) as f64)?;
        }
        Ok(())
    }
}
