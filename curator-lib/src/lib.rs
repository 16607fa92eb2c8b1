//! Batch engines shared by the CLI commands.
//!
//! Directory scanning, file-type identification, and video integrity
//! verification. The external tools (`file`, `ffmpeg`) sit behind
//! traits so the engines can be exercised in tests without shelling
//! out.

pub mod error;
pub mod identify;
pub mod scanner;
pub mod summarise;
pub mod verify;

pub use error::EngineError;
pub use identify::{FileIdentifier, SystemFileIdentifier};
pub use scanner::{VIDEO_EXTENSIONS, scan_files, scan_videos};
pub use summarise::{CategorizedFile, category_counts, summarise_directory};
pub use verify::{
    DecodeVerdict, FfmpegDecoder, VerificationCache, VerifyStatus, VideoDecoder,
    default_cache_path, verify_videos,
};
