//! Directory categorization: walk, identify, classify, tally.

use std::path::{Path, PathBuf};

use curator_core::{Category, classify};

use crate::error::EngineError;
use crate::identify::FileIdentifier;
use crate::scanner::scan_files;

/// One categorized file.
#[derive(Debug, Clone)]
pub struct CategorizedFile {
    pub path: PathBuf,
    pub category: Category,
    pub description: String,
}

/// Walk `root` and describe and classify every file.
///
/// `on_file` is called after each file, for progress display. An
/// identification failure aborts the walk.
pub fn summarise_directory(
    root: &Path,
    identifier: &impl FileIdentifier,
    mut on_file: impl FnMut(&CategorizedFile),
) -> Result<Vec<CategorizedFile>, EngineError> {
    let mut rows = Vec::new();
    for path in scan_files(root)? {
        let description = identifier.describe(&path)?;
        let row = CategorizedFile {
            category: classify(&description),
            path,
            description,
        };
        on_file(&row);
        rows.push(row);
    }
    Ok(rows)
}

/// Per-category counts in display order, skipping empty categories.
pub fn category_counts(rows: &[CategorizedFile]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|category| {
            let count = rows.iter().filter(|row| row.category == *category).count();
            (*category, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Identifier that answers from the file extension.
    struct FakeIdentifier;

    impl FileIdentifier for FakeIdentifier {
        fn describe(&self, path: &Path) -> Result<String, EngineError> {
            let description = match path.extension().and_then(|e| e.to_str()) {
                Some("avi") => "RIFF (little-endian) data, AVI",
                Some("jpg") => "JPEG image data, baseline, 1024x768",
                Some("txt") => "ASCII text",
                _ => "data",
            };
            Ok(description.to_string())
        }
    }

    #[test]
    fn test_summarise_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clip.avi"), b"").unwrap();
        fs::write(dir.path().join("photo.jpg"), b"").unwrap();
        fs::write(dir.path().join("readme.txt"), b"").unwrap();

        let mut seen = 0;
        let rows = summarise_directory(dir.path(), &FakeIdentifier, |_| seen += 1).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(seen, 3);

        let counts = category_counts(&rows);
        assert_eq!(
            counts,
            vec![
                (Category::Video, 1),
                (Category::MediumResImage, 1),
                (Category::Text, 1),
            ]
        );
    }
}
