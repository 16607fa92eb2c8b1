use std::path::{Path, PathBuf};

use curator_lib::{
    FfmpegDecoder, VerificationCache, VerifyStatus, default_cache_path, scan_videos, verify_videos,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::CliError;

pub(crate) fn run_verify_videos(
    directory: &Path,
    cache_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let cache_path = match cache_path {
        Some(path) => path,
        None => default_cache_path()?,
    };
    let mut cache = VerificationCache::load(cache_path)?;

    let total = scan_videos(directory)?.len();
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("static template"),
    );

    let result = verify_videos(directory, &FfmpegDecoder, &mut cache, |path, status| {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        match status {
            VerifyStatus::Ok => bar.set_message(format!("OK {name}")),
            VerifyStatus::Skipped => bar.set_message(format!("Skipped {name}")),
        }
        bar.inc(1);
    });
    bar.finish_and_clear();
    result?;

    println!("Verified {total} videos");
    Ok(())
}
