//! Recursive directory scanning for the batch jobs.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::EngineError;

/// File extensions treated as video during verification (lowercase).
pub const VIDEO_EXTENSIONS: &[&str] = &["avi", "mpg", "mpeg", "mp4", "mov", "wmv"];

/// Collect every file under `root`, in walk order.
pub fn scan_files(root: &Path) -> Result<Vec<PathBuf>, EngineError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| EngineError::Io(e.into()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Collect files under `root` with a video extension (case-insensitive).
pub fn scan_videos(root: &Path) -> Result<Vec<PathBuf>, EngineError> {
    Ok(scan_files(root)?
        .into_iter()
        .filter(|path| has_video_extension(path))
        .collect())
}

fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
