//! The four-sheet release report.

use std::path::Path;

use curator_core::{
    IncompleteFile, IncompleteReleaseSummary, Release, ReleaseLink, VerificationOutcome,
    format_size,
};
use rust_xlsxwriter::{Color, Format, FormatAlign, Url, Workbook, Worksheet};

use crate::{ColumnWidths, ReportError};

/// Input data for the release report, one field per sheet.
#[derive(Debug)]
pub struct ReportData {
    pub releases: Vec<Release>,
    pub incomplete_releases: Vec<IncompleteReleaseSummary>,
    pub incomplete_files: Vec<IncompleteFile>,
    pub release_14_links: Vec<ReleaseLink>,
}

/// Render the report, fully overwriting any file at `path`.
pub fn write_report(data: &ReportData, path: &Path) -> Result<(), ReportError> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }

    let mut links = data.release_14_links.clone();
    links.sort_by(|a, b| a.path.cmp(&b.path));

    let mut workbook = Workbook::new();
    build_releases_sheet(workbook.add_worksheet(), &data.releases)?;
    build_incomplete_releases_sheet(workbook.add_worksheet(), &data.incomplete_releases)?;
    build_incomplete_files_sheet(workbook.add_worksheet(), &data.incomplete_files)?;
    build_links_sheet(workbook.add_worksheet(), &links)?;
    workbook.save(path)?;
    Ok(())
}

/// Fill colors for the closed set of verification outcomes. Unlisted
/// outcomes get no fill.
fn outcome_fill(outcome: &VerificationOutcome) -> Option<Color> {
    match outcome {
        VerificationOutcome::Verified => Some(Color::RGB(0x00FF00)),
        VerificationOutcome::Missing => Some(Color::RGB(0xFF0000)),
        VerificationOutcome::NoTorrent => Some(Color::RGB(0xFFA500)),
        VerificationOutcome::Incomplete => Some(Color::RGB(0x00FFFF)),
        VerificationOutcome::Other(_) => None,
    }
}

fn write_headers(
    sheet: &mut Worksheet,
    headers: &[&str],
    widths: &mut ColumnWidths,
) -> Result<(), ReportError> {
    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        widths.note(col, header);
    }
    Ok(())
}

fn build_releases_sheet(sheet: &mut Worksheet, releases: &[Release]) -> Result<(), ReportError> {
    sheet.set_name("Releases")?;
    let headers = ["Date", "Name", "Files", "Size", "Status", "Download Link"];
    let mut widths = ColumnWidths::new(headers.len());
    write_headers(sheet, &headers, &mut widths)?;

    for (index, release) in releases.iter().enumerate() {
        let row = (index + 1) as u32;
        let files = release
            .file_count
            .map_or_else(|| "N/A".to_string(), |n| n.to_string());
        let size = format_size(release.size);
        let status = release
            .verification_outcome
            .as_ref()
            .map_or_else(|| "UNKNOWN".to_string(), |outcome| outcome.to_string());

        sheet.write_string(row, 0, &release.date)?;
        sheet.write_string(row, 1, &release.name)?;
        sheet.write_string(row, 2, &files)?;
        sheet.write_string(row, 3, &size)?;

        let mut status_format = Format::new().set_bold().set_align(FormatAlign::Center);
        if let Some(fill) = release.verification_outcome.as_ref().and_then(outcome_fill) {
            status_format = status_format.set_background_color(fill);
        }
        sheet.write_string_with_format(row, 4, &status, &status_format)?;

        match &release.download_url {
            Some(url) => {
                sheet.write_url(row, 5, Url::new(url))?;
                widths.note(5, url);
            }
            None => {
                sheet.write_string(row, 5, "N/A")?;
                widths.note(5, "N/A");
            }
        }

        widths.note(0, &release.date);
        widths.note(1, &release.name);
        widths.note(2, &files);
        widths.note(3, &size);
        widths.note(4, &status);
    }

    widths.apply(sheet)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn build_incomplete_releases_sheet(
    sheet: &mut Worksheet,
    summaries: &[IncompleteReleaseSummary],
) -> Result<(), ReportError> {
    sheet.set_name("Incomplete Releases")?;
    let headers = [
        "Name",
        "Total Files",
        "Corrupt Files",
        "Missing Files",
        "Total Size",
        "Corrupt Size",
        "Missing Size",
        "Notes",
    ];
    let mut widths = ColumnWidths::new(headers.len());
    write_headers(sheet, &headers, &mut widths)?;

    for (index, summary) in summaries.iter().enumerate() {
        let row = (index + 1) as u32;
        let total_size = format_size(summary.size);
        let corrupt_size = format_size(Some(summary.corrupt_size));
        let missing_size = format_size(Some(summary.missing_size));
        let notes = summary.notes.as_deref().unwrap_or("");

        sheet.write_string(row, 0, &summary.name)?;
        if let Some(count) = summary.file_count {
            sheet.write_number(row, 1, count as f64)?;
            widths.note(1, &count.to_string());
        }
        sheet.write_number(row, 2, summary.corrupt_file_count as f64)?;
        sheet.write_number(row, 3, summary.missing_file_count as f64)?;
        sheet.write_string(row, 4, &total_size)?;
        sheet.write_string(row, 5, &corrupt_size)?;
        sheet.write_string(row, 6, &missing_size)?;
        sheet.write_string(row, 7, notes)?;

        widths.note(0, &summary.name);
        widths.note(2, &summary.corrupt_file_count.to_string());
        widths.note(3, &summary.missing_file_count.to_string());
        widths.note(4, &total_size);
        widths.note(5, &corrupt_size);
        widths.note(6, &missing_size);
        widths.note(7, notes);
    }

    widths.apply(sheet)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn build_incomplete_files_sheet(
    sheet: &mut Worksheet,
    files: &[IncompleteFile],
) -> Result<(), ReportError> {
    sheet.set_name("Corrupt or Missing Files")?;
    let headers = ["Release", "Size", "Status", "Path"];
    let mut widths = ColumnWidths::new(headers.len());
    write_headers(sheet, &headers, &mut widths)?;

    for (index, file) in files.iter().enumerate() {
        let row = (index + 1) as u32;
        let size = format_size(file.size);
        let status = file.status.to_string();

        sheet.write_string(row, 0, &file.release_name)?;
        sheet.write_string(row, 1, &size)?;
        sheet.write_string(row, 2, &status)?;
        sheet.write_string(row, 3, &file.file_path)?;

        widths.note(0, &file.release_name);
        widths.note(1, &size);
        widths.note(2, &status);
        widths.note(3, &file.file_path);
    }

    widths.apply(sheet)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn build_links_sheet(sheet: &mut Worksheet, links: &[ReleaseLink]) -> Result<(), ReportError> {
    sheet.set_name("Release 14 Links")?;
    let headers = ["Collection", "Link"];
    let mut widths = ColumnWidths::new(headers.len());
    write_headers(sheet, &headers, &mut widths)?;

    for (index, link) in links.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_string(row, 0, &link.path)?;
        sheet.write_url(row, 1, Url::new(&link.url))?;

        widths.note(0, &link.path);
        widths.note(1, &link.url);
    }

    widths.apply(sheet)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::FileStatus;

    fn sample_data() -> ReportData {
        ReportData {
            releases: vec![Release {
                id: "r1".to_string(),
                date: "2004-01-01".to_string(),
                name: "Release 1".to_string(),
                directory: None,
                file_count: Some(3),
                notes: None,
                size: Some(2048),
                torrent_url: None,
                download_url: Some("https://example.com/r1".to_string()),
                verification_outcome: Some(VerificationOutcome::Incomplete),
            }],
            incomplete_releases: vec![IncompleteReleaseSummary {
                name: "Release 1".to_string(),
                file_count: Some(3),
                corrupt_file_count: 1,
                missing_file_count: 0,
                size: Some(2048),
                corrupt_size: 100,
                missing_size: 0,
                notes: Some("partial recovery".to_string()),
            }],
            incomplete_files: vec![IncompleteFile {
                release_name: "Release 1".to_string(),
                file_path: "/a/one.avi".to_string(),
                size: Some(100),
                status: FileStatus::Corrupted,
            }],
            release_14_links: vec![
                ReleaseLink {
                    path: "B".to_string(),
                    url: "https://example.com/B".to_string(),
                },
                ReleaseLink {
                    path: "A".to_string(),
                    url: "https://example.com/A".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        std::fs::write(&path, b"stale").unwrap();

        write_report(&sample_data(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx files are zip archives; the stale placeholder is gone.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_outcome_fills() {
        assert_eq!(
            outcome_fill(&VerificationOutcome::Verified),
            Some(Color::RGB(0x00FF00))
        );
        assert_eq!(
            outcome_fill(&VerificationOutcome::Missing),
            Some(Color::RGB(0xFF0000))
        );
        assert_eq!(
            outcome_fill(&VerificationOutcome::NoTorrent),
            Some(Color::RGB(0xFFA500))
        );
        assert_eq!(
            outcome_fill(&VerificationOutcome::Incomplete),
            Some(Color::RGB(0x00FFFF))
        );
        assert_eq!(
            outcome_fill(&VerificationOutcome::Other("UNKNOWN".to_string())),
            None
        );
    }
}
