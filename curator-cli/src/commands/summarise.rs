use std::path::{Path, PathBuf};

use curator_lib::{SystemFileIdentifier, category_counts, scan_files, summarise_directory};
use curator_report::{SummaryRow, write_summary};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::CliError;

pub(crate) fn run_summarise(directory: &Path) -> Result<(), CliError> {
    // Counting pass first so the bar knows its length.
    let total = scan_files(directory)?.len();
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("static template"),
    );

    let rows = summarise_directory(directory, &SystemFileIdentifier, |file| {
        if let Some(name) = file.path.file_name().and_then(|n| n.to_str()) {
            bar.set_message(name.to_string());
        }
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    println!("Summary:");
    for (category, count) in category_counts(&rows) {
        println!("{}: {count}", category.label());
    }

    let output = summary_output_path(directory);
    println!("Saving {}", output.display());
    let sheet_rows: Vec<SummaryRow> = rows
        .into_iter()
        .map(|file| SummaryRow {
            path: file.path.display().to_string(),
            category: file.category,
            description: file.description,
        })
        .collect();
    write_summary(&sheet_rows, &output)?;
    Ok(())
}

/// `<directory basename>.xlsx` in the working directory.
fn summary_output_path(directory: &Path) -> PathBuf {
    let stem = directory
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("summary");
    PathBuf::from(format!("{stem}.xlsx"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_output_path_uses_directory_name() {
        assert_eq!(
            summary_output_path(Path::new("/data/release-42")),
            PathBuf::from("release-42.xlsx")
        );
    }

    #[test]
    fn test_summary_output_path_fallback() {
        assert_eq!(summary_output_path(Path::new("/")), PathBuf::from("summary.xlsx"));
    }
}
