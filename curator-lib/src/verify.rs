//! Video integrity verification with a persistent result cache.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::EngineError;
use crate::scanner::scan_videos;

/// Outcome of one strict decode pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeVerdict {
    Ok,
    Failed { diagnostic: String },
}

/// Runs a strict decode pass over a video file.
pub trait VideoDecoder {
    fn check(&self, path: &Path) -> Result<DecodeVerdict, EngineError>;
}

/// Decoder backed by `ffmpeg -v error`, discarding decoded output.
#[derive(Debug, Default)]
pub struct FfmpegDecoder;

impl VideoDecoder for FfmpegDecoder {
    fn check(&self, path: &Path) -> Result<DecodeVerdict, EngineError> {
        let output = Command::new("ffmpeg")
            .args(["-v", "error", "-i"])
            .arg(path)
            .args(["-f", "null", "-"])
            .output()?;
        if output.status.success() {
            Ok(DecodeVerdict::Ok)
        } else {
            Ok(DecodeVerdict::Failed {
                diagnostic: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Append-only set of basenames that have passed verification.
///
/// Backed by a line-delimited text file. Entries are trusted
/// indefinitely: the file is never pruned or rewritten, only appended
/// to, and nothing invalidates an entry if the underlying file changes.
pub struct VerificationCache {
    path: PathBuf,
    entries: HashSet<String>,
}

impl VerificationCache {
    /// Load the cache, starting empty if the file doesn't exist.
    pub fn load(path: PathBuf) -> Result<Self, EngineError> {
        let entries = match File::open(&path) {
            Ok(file) => BufReader::new(file)
                .lines()
                .collect::<Result<HashSet<_>, _>>()?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Record a verified basename, appending to the file immediately.
    pub fn record(&mut self, name: &str) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{name}")?;
        file.flush()?;
        self.entries.insert(name.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default cache location under the user data directory.
pub fn default_cache_path() -> Result<PathBuf, EngineError> {
    dirs::data_dir()
        .map(|dir| dir.join("archive-curator").join("verified-videos"))
        .ok_or(EngineError::NoDataDir)
}

/// Per-file verification report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStatus {
    Ok,
    Skipped,
}

/// Verify every video under `root`, in discovery order.
///
/// Files whose basename is already in the cache are skipped. A decode
/// failure aborts the whole run; remaining files are not checked.
/// Basenames are the cache key, so two differently-pathed files that
/// share one are treated as the same entry.
pub fn verify_videos(
    root: &Path,
    decoder: &impl VideoDecoder,
    cache: &mut VerificationCache,
    mut on_file: impl FnMut(&Path, VerifyStatus),
) -> Result<(), EngineError> {
    for path in scan_videos(root)? {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        if cache.contains(&name) {
            on_file(&path, VerifyStatus::Skipped);
            continue;
        }
        match decoder.check(&path)? {
            DecodeVerdict::Ok => {
                cache.record(&name)?;
                on_file(&path, VerifyStatus::Ok);
            }
            DecodeVerdict::Failed { diagnostic } => {
                return Err(EngineError::DecodeFailure { name, diagnostic });
            }
        }
    }
    Ok(())
}
