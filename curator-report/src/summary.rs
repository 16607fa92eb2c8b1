//! The single-sheet file categorization summary.

use std::path::Path;

use curator_core::Category;
use rust_xlsxwriter::{Format, Workbook};

use crate::{ColumnWidths, ReportError};

/// One categorized file row.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub path: String,
    pub category: Category,
    pub description: String,
}

/// Render the "Release Files" sheet, fully overwriting any file at
/// `path`.
pub fn write_summary(rows: &[SummaryRow], path: &Path) -> Result<(), ReportError> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Release Files")?;

    let headers = ["Path", "Category", "Description"];
    let mut widths = ColumnWidths::new(headers.len());
    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        widths.note(col, header);
    }

    for (index, entry) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        let category = entry.category.label();

        sheet.write_string(row, 0, &entry.path)?;
        sheet.write_string(row, 1, category)?;
        sheet.write_string(row, 2, &entry.description)?;

        widths.note(0, &entry.path);
        widths.note(1, category);
        widths.note(2, &entry.description);
    }

    widths.apply(sheet)?;
    sheet.set_freeze_panes(1, 0)?;
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_summary_smoke() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.xlsx");
        let rows = vec![SummaryRow {
            path: "/a/one.avi".to_string(),
            category: Category::Video,
            description: "RIFF (little-endian) data, AVI".to_string(),
        }];

        write_summary(&rows, &path).unwrap();
        assert!(path.exists());
    }
}
